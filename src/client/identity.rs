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

use async_trait::async_trait;
use secrecy::ExposeSecret;

use openstack_keystone_api_types::v3::ec2 as api_ec2;
use openstack_keystone_api_types::v3::user as api;

use super::{HttpClient, NO_QUERY};
use super::error::ClientError;
use crate::identity::types::*;

impl From<api::User> for User {
    fn from(value: api::User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            enabled: value.enabled,
            project_id: value.default_project_id,
        }
    }
}

impl From<api_ec2::Ec2Credential> for Ec2Credential {
    fn from(value: api_ec2::Ec2Credential) -> Self {
        Self {
            access: value.access,
            secret: value.secret,
            project_id: value.tenant_id,
            user_id: value.user_id,
        }
    }
}

impl From<UserCreate> for api::UserCreate {
    fn from(value: UserCreate) -> Self {
        Self {
            default_project_id: value.project_id,
            domain_id: value.domain_id,
            email: value.email,
            enabled: Some(value.enabled),
            name: value.name,
            password: Some(value.password.expose_secret().to_string()),
        }
    }
}

impl From<UserUpdate> for api::UserUpdate {
    fn from(value: UserUpdate) -> Self {
        Self {
            default_project_id: value.project_id,
            domain_id: value.domain_id,
            email: value.email,
            enabled: value.enabled,
            name: value.name,
            password: value
                .password
                .map(|password| password.expose_secret().to_string()),
        }
    }
}

fn ec2_path(user_id: &str) -> String {
    format!("v3/users/{user_id}/credentials/OS-EC2")
}

#[async_trait]
impl IdentityApi for HttpClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_users(&self, params: &UserListParameters) -> Result<Vec<User>, ClientError> {
        let query = api::UserListParameters {
            default_project_id: params.default_project_id.clone(),
            domain_id: params.domain_id.clone(),
            name: params.name.clone(),
        };
        let list: api::UserList = self.get("v3/users", &query).await?;
        Ok(list.users.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_user<'a>(&self, user_id: &'a str) -> Result<Option<User>, ClientError> {
        Ok(self
            .get_optional::<api::UserResponse>(&format!("v3/users/{user_id}"))
            .await?
            .map(|rsp| rsp.user.into()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_user(&self, user: UserCreate) -> Result<User, ClientError> {
        let rsp: api::UserResponse = self
            .post(
                "v3/users",
                &api::UserCreateRequest { user: user.into() },
            )
            .await?;
        Ok(rsp.user.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn update_user<'a>(
        &self,
        user_id: &'a str,
        user: UserUpdate,
    ) -> Result<User, ClientError> {
        let rsp: api::UserResponse = self
            .patch(
                &format!("v3/users/{user_id}"),
                &api::UserUpdateRequest { user: user.into() },
            )
            .await?;
        Ok(rsp.user.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_user<'a>(&self, user_id: &'a str) -> Result<(), ClientError> {
        self.delete(&format!("v3/users/{user_id}")).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<Ec2Credential, ClientError> {
        let rsp: api_ec2::Ec2CredentialResponse = self
            .post(
                &ec2_path(user_id),
                &api_ec2::Ec2CredentialCreateRequest {
                    tenant_id: project_id.into(),
                },
            )
            .await?;
        Ok(rsp.credential.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        access: &'a str,
    ) -> Result<Option<Ec2Credential>, ClientError> {
        Ok(self
            .get_optional::<api_ec2::Ec2CredentialResponse>(&format!(
                "{}/{access}",
                ec2_path(user_id)
            ))
            .await?
            .map(|rsp| rsp.credential.into()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_ec2_credentials<'a>(
        &self,
        user_id: &'a str,
    ) -> Result<Vec<Ec2Credential>, ClientError> {
        let list: api_ec2::Ec2CredentialList = self.get(&ec2_path(user_id), NO_QUERY).await?;
        Ok(list.credentials.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        access: &'a str,
    ) -> Result<(), ClientError> {
        self.delete(&format!("{}/{access}", ec2_path(user_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::client::tests::token_client;

    #[tokio::test]
    async fn test_list_users() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v3/users")
                    .query_param("name", "alice")
                    .query_param("domain_id", "default")
                    .header("x-auth-token", "static-token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"users": [{
                        "id": "u1",
                        "name": "alice",
                        "domain_id": "default",
                        "default_project_id": "p1",
                        "enabled": true,
                        "links": {"self": "http://localhost/v3/users/u1"}
                    }]}));
            })
            .await;
        let client = token_client(&server).await;

        let users = client
            .list_users(&UserListParameters {
                name: Some("alice".into()),
                domain_id: Some("default".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(
            vec![User {
                id: "u1".into(),
                name: "alice".into(),
                email: None,
                enabled: true,
                project_id: Some("p1".into()),
            }],
            users
        );
    }

    #[tokio::test]
    async fn test_get_user_missing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v3/users/missing");
                then.status(404)
                    .header("content-type", "application/json")
                    .json_body(json!({"error": {"code": 404, "message": "not found"}}));
            })
            .await;
        let client = token_client(&server).await;

        assert!(client.get_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_user() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/users").json_body(json!({"user": {
                    "name": "carol",
                    "password": "secret",
                    "default_project_id": "p1",
                    "enabled": true
                }}));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"user": {
                        "id": "u3",
                        "name": "carol",
                        "default_project_id": "p1",
                        "enabled": true
                    }}));
            })
            .await;
        let client = token_client(&server).await;

        let user = client
            .create_user(
                UserCreateBuilder::default()
                    .name("carol")
                    .password("secret")
                    .project_id("p1")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!("u3", user.id);
    }

    #[tokio::test]
    async fn test_update_user() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/v3/users/u1")
                    .json_body(json!({"user": {"email": "a@b.c", "enabled": false}}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"user": {
                        "id": "u1",
                        "name": "alice",
                        "email": "a@b.c",
                        "enabled": false
                    }}));
            })
            .await;
        let client = token_client(&server).await;

        let user = client
            .update_user(
                "u1",
                UserUpdateBuilder::default()
                    .email("a@b.c")
                    .enabled(false)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        mock.assert_async().await;
        assert!(!user.enabled);
    }

    #[tokio::test]
    async fn test_ec2_credentials() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v3/users/u1/credentials/OS-EC2")
                    .json_body(json!({"tenant_id": "p1"}));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"credential": {
                        "access": "ak",
                        "secret": "sk",
                        "tenant_id": "p1",
                        "user_id": "u1"
                    }}));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method("GET").path("/v3/users/u1/credentials/OS-EC2");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"credentials": [{
                        "access": "ak",
                        "secret": "sk",
                        "tenant_id": "p1",
                        "user_id": "u1"
                    }]}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method("DELETE")
                    .path("/v3/users/u1/credentials/OS-EC2/ak");
                then.status(204);
            })
            .await;
        let client = token_client(&server).await;

        let created = client.create_ec2_credential("u1", "p1").await.unwrap();
        assert_eq!("p1", created.project_id);
        assert_eq!(
            vec![created],
            client.list_ec2_credentials("u1").await.unwrap()
        );
        client.delete_ec2_credential("u1", "ak").await.unwrap();
        create.assert_async().await;
        list.assert_async().await;
        delete.assert_async().await;
    }
}
