// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! Operations dispatched against the HTTP client and a mocked identity
//! service.

use std::collections::HashMap;

use httpmock::{Method, MockServer};
use serde_json::{Value, json};

use openstack_keystone_ops::client::HttpConnector;
use openstack_keystone_ops::dispatch::{Arguments, Dispatcher, Output};

/// Configuration pointing the `cloud` profile to the mock server.
fn store(server: &MockServer) -> HashMap<String, Value> {
    HashMap::from([
        ("keystone.auth_url".into(), json!("http://127.0.0.1:1/v2.0/")),
        (
            "cloud:keystone.auth_url".into(),
            json!(server.url("/v2.0/")),
        ),
        ("cloud:keystone.user".into(), json!("ops")),
        ("cloud:keystone.password".into(), json!("secret")),
        ("cloud:keystone.project".into(), json!("service")),
    ])
}

async fn mock_auth(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/v3/auth/tokens")
                .json_body_partial(
                    r#"{"auth": {"identity": {"password": {"user": {"name": "ops", "password": "secret"}}}}}"#,
                );
            then.status(201)
                .header("x-subject-token", "session-token")
                .header("content-type", "application/json")
                .json_body(json!({"token": {
                    "methods": ["password"],
                    "expires_at": "2030-01-01T00:00:00Z",
                    "user": {"id": "uid", "name": "ops"},
                    "project": {"id": "pid", "name": "service"}
                }}));
        })
        .await
}

#[tokio::test]
async fn test_project_create_and_get() {
    let server = MockServer::start_async().await;
    let auth = mock_auth(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/v3/projects")
                .header("x-auth-token", "session-token")
                .json_body_partial(r#"{"project": {"name": "t1", "enabled": true}}"#);
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"project": {"id": "p1", "name": "t1", "enabled": true}}));
        })
        .await;
    let get = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/v3/projects/p1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"project": {
                    "id": "p1",
                    "name": "t1",
                    "description": "first",
                    "enabled": true
                }}));
        })
        .await;

    let store = store(&server);
    let dispatcher = Dispatcher::new(&store, HttpConnector);
    let expected = Output::Mapping(json!({"t1": {
        "id": "p1",
        "name": "t1",
        "description": "first",
        "enabled": true
    }}));

    assert_eq!(
        expected,
        dispatcher
            .call(
                "keystone.tenant_create",
                Arguments::from_pairs(["profile=cloud", "name=t1"]).unwrap()
            )
            .await
            .unwrap()
    );
    assert_eq!(
        expected,
        dispatcher
            .call(
                "project_get",
                Arguments::from_pairs(["profile=cloud", "project_id=p1"]).unwrap()
            )
            .await
            .unwrap()
    );
    auth.assert_hits_async(2).await;
    create.assert_async().await;
    get.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_role_get_unknown_name() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    let list = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/v3/roles")
                .query_param("name", "nonexistent");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"roles": []}));
        })
        .await;

    let store = store(&server);
    let err = Dispatcher::new(&store, HttpConnector)
        .call(
            "role_get",
            Arguments::from_pairs(["profile=cloud", "name=nonexistent"]).unwrap(),
        )
        .await
        .unwrap_err();
    assert_eq!("Unable to resolve role id", err.to_string());
    list.assert_async().await;
}

#[tokio::test]
async fn test_endpoint_delete_removes_all() {
    let server = MockServer::start_async().await;
    mock_auth(&server).await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/v3/services")
                .query_param("name", "nova");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"services": [
                    {"id": "s1", "name": "nova", "type": "compute", "enabled": true}
                ]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/v3/endpoints")
                .query_param("service_id", "s1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"endpoints": [
                    {"id": "e1", "interface": "public", "url": "http://nova", "service_id": "s1", "enabled": true},
                    {"id": "e2", "interface": "admin", "url": "http://nova:8774", "service_id": "s1", "enabled": true}
                ]}));
        })
        .await;
    let delete_public = server
        .mock_async(|when, then| {
            when.method(Method::DELETE).path("/v3/endpoints/e1");
            then.status(204);
        })
        .await;
    let delete_admin = server
        .mock_async(|when, then| {
            when.method(Method::DELETE).path("/v3/endpoints/e2");
            then.status(204);
        })
        .await;

    let store = store(&server);
    let output = Dispatcher::new(&store, HttpConnector)
        .call(
            "endpoint_delete",
            Arguments::from_pairs(["profile=cloud", "service=nova"]).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        "Endpoints of service ID s1 deleted (nova)",
        output.to_string()
    );
    delete_public.assert_async().await;
    delete_admin.assert_async().await;
}
