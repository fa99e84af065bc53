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
//! # Identity service client
//!
//! [`HttpClient`] speaks the Identity API v3 over HTTP. It implements every
//! client trait consumed by the [`Keystone`](crate::keystone::Keystone)
//! operations, so the operations run unchanged against a mocked client in
//! tests.
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use openstack_keystone_api_types::error::ErrorResponse;
use openstack_keystone_api_types::scope::*;
use openstack_keystone_api_types::v3::auth::token::*;

use crate::auth::error::AuthError;
use crate::auth::{Connector, Credentials, PasswordCredentials};
use crate::token::TokenInfo;

mod assignment;
mod catalog;
pub mod error;
mod identity;
#[cfg(test)]
pub mod mock;
mod resource;
mod token;

use error::ClientError;

const SUBJECT_TOKEN: &str = "x-subject-token";
const AUTH_TOKEN: &str = "x-auth-token";
const NO_QUERY: &[(&str, &str)] = &[];

/// Authenticated Identity API v3 session.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    token: SecretString,
    token_info: Option<TokenInfo>,
}

/// [`Connector`] establishing [`HttpClient`] sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpConnector;

#[async_trait]
impl Connector for HttpConnector {
    type Client = HttpClient;

    async fn connect(&self, credentials: &Credentials) -> Result<HttpClient, AuthError> {
        HttpClient::connect(credentials).await
    }
}

/// Base URL of the API with the trailing `v2.0` or `v3` version segment
/// removed. The result always ends with `/`.
pub(crate) fn api_base(url: &Url) -> Url {
    let mut segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    if matches!(segments.last(), Some(&"v2.0") | Some(&"v3")) {
        segments.pop();
    }
    let path: String = segments.iter().map(|s| format!("{s}/")).collect();
    let mut base = url.clone();
    base.set_path(&format!("/{path}"));
    base.set_query(None);
    base
}

fn session_client(token: &SecretString, insecure: bool) -> Result<Client, AuthError> {
    let mut token = HeaderValue::from_str(token.expose_secret())?;
    token.set_sensitive(true);
    Ok(ClientBuilder::new()
        .default_headers(HeaderMap::from_iter([(
            HeaderName::from_static(AUTH_TOKEN),
            token,
        )]))
        .danger_accept_invalid_certs(insecure)
        .build()?)
}

fn token_info(id: &SecretString, token: Token) -> TokenInfo {
    TokenInfo {
        id: id.expose_secret().to_string(),
        expires: token.expires_at,
        user_id: token.user.id,
        project_id: token.project.map(|project| project.id),
    }
}

/// Extract the error message from the failed response.
async fn error_message(rsp: Response) -> String {
    let status = rsp.status();
    match rsp.text().await {
        Ok(text) => serde_json::from_str::<ErrorResponse>(&text)
            .map(|err| err.error.message)
            .unwrap_or(text),
        Err(_) => status.to_string(),
    }
}

async fn check(rsp: Response) -> Result<Response, ClientError> {
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(rsp).await,
    })
}

impl HttpClient {
    /// Authenticate with the credentials and return the session.
    pub async fn connect(credentials: &Credentials) -> Result<Self, AuthError> {
        match credentials {
            Credentials::Token { token, endpoint } => {
                debug!("using static token against {}", endpoint);
                Ok(Self {
                    client: session_client(token, false)?,
                    base_url: api_base(endpoint),
                    token: token.clone(),
                    token_info: None,
                })
            }
            Credentials::Password(password) => Self::password_auth(password).await,
        }
    }

    #[tracing::instrument(level = "debug", skip(credentials), fields(user = %credentials.username))]
    async fn password_auth(credentials: &PasswordCredentials) -> Result<Self, AuthError> {
        let base_url = api_base(&credentials.auth_url);
        let default_domain = DomainBuilder::default().id("default").build()?;
        let identity = IdentityBuilder::default()
            .methods(vec!["password".into()])
            .password(
                PasswordAuthBuilder::default()
                    .user(
                        UserPasswordBuilder::default()
                            .name(credentials.username.clone())
                            .domain(default_domain.clone())
                            .password(credentials.password.expose_secret())
                            .build()?,
                    )
                    .build()?,
            )
            .build()?;
        let scope = match &credentials.project_id {
            Some(project_id) => ScopeProjectBuilder::default().id(project_id.clone()).build()?,
            None => ScopeProjectBuilder::default()
                .name(credentials.project_name.clone())
                .domain(default_domain)
                .build()?,
        };
        let auth_request = AuthRequest {
            auth: AuthRequestInner {
                identity,
                scope: Some(Scope::Project(scope)),
            },
        };

        let rsp = ClientBuilder::new()
            .danger_accept_invalid_certs(credentials.insecure)
            .build()?
            .post(base_url.join("v3/auth/tokens")?)
            .json(&auth_request)
            .send()
            .await?;
        if !rsp.status().is_success() {
            return Err(AuthError::Rejected {
                status: rsp.status().as_u16(),
                message: error_message(rsp).await,
            });
        }
        let token = SecretString::from(
            rsp.headers()
                .get(SUBJECT_TOKEN)
                .and_then(|value| value.to_str().ok())
                .ok_or(AuthError::MissingSubjectToken)?
                .to_string(),
        );
        let body: TokenResponse = rsp.json().await?;
        debug!("authenticated as user {}", body.token.user.id);

        Ok(Self {
            client: session_client(&token, credentials.insecure)?,
            base_url,
            token_info: Some(token_info(&token, body.token)),
            token,
        })
    }

    /// Base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        trace!("GET {}", url);
        let rsp = self.client.get(url).query(query).send().await?;
        Ok(check(rsp).await?.json().await?)
    }

    /// GET the resource, mapping `404 Not Found` to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ClientError> {
        let url = self.url(path)?;
        trace!("GET {}", url);
        let rsp = self.client.get(url).send().await?;
        if rsp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(rsp).await?.json().await?))
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        trace!("POST {}", url);
        let rsp = self.client.post(url).json(body).send().await?;
        Ok(check(rsp).await?.json().await?)
    }

    async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        trace!("PATCH {}", url);
        let rsp = self.client.patch(url).json(body).send().await?;
        Ok(check(rsp).await?.json().await?)
    }

    async fn put(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path)?;
        trace!("PUT {}", url);
        check(self.client.put(url).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path)?;
        trace!("DELETE {}", url);
        check(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use httpmock::MockServer;
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;
    use crate::assignment::{AssignmentApi, RoleListParameters};

    /// Session against the mock server authenticated with the static token.
    pub(crate) async fn token_client(server: &MockServer) -> HttpClient {
        HttpClient::connect(&Credentials::Token {
            token: SecretString::from("static-token"),
            endpoint: format!("{}/v3", server.base_url()).parse().unwrap(),
        })
        .await
        .unwrap()
    }

    fn password_credentials(server: &MockServer, project_id: Option<&str>) -> Credentials {
        Credentials::Password(PasswordCredentials {
            username: "admin".into(),
            password: SecretString::from("ADMIN"),
            project_name: "admin".into(),
            project_id: project_id.map(Into::into),
            auth_url: format!("{}/v2.0/", server.base_url()).parse().unwrap(),
            insecure: false,
        })
    }

    #[test]
    fn test_api_base() {
        for (url, expected) in [
            ("http://127.0.0.1:35357/v2.0/", "http://127.0.0.1:35357/"),
            ("http://127.0.0.1:35357/v2.0", "http://127.0.0.1:35357/"),
            ("http://127.0.0.1:5000/v3", "http://127.0.0.1:5000/"),
            ("https://cloud/identity/v3/", "https://cloud/identity/"),
            ("https://cloud/identity", "https://cloud/identity/"),
        ] {
            assert_eq!(expected, api_base(&url.parse().unwrap()).as_str());
        }
    }

    #[tokio::test]
    async fn test_password_auth_by_project_name() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/auth/tokens").json_body(json!({
                    "auth": {
                        "identity": {
                            "methods": ["password"],
                            "password": {"user": {
                                "name": "admin",
                                "domain": {"id": "default"},
                                "password": "ADMIN"
                            }}
                        },
                        "scope": {"project": {"name": "admin", "domain": {"id": "default"}}}
                    }
                }));
                then.status(201)
                    .header("x-subject-token", "issued-token")
                    .header("content-type", "application/json")
                    .json_body(json!({"token": {
                        "methods": ["password"],
                        "expires_at": "2030-01-01T00:00:00Z",
                        "user": {"id": "uid", "name": "admin"},
                        "project": {"id": "pid", "name": "admin"}
                    }}));
            })
            .await;
        let roles = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v3/roles")
                    .header("x-auth-token", "issued-token");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"roles": []}));
            })
            .await;

        let client = HttpClient::connect(&password_credentials(&server, None))
            .await
            .unwrap();
        auth.assert_async().await;
        let token = client.token_info.clone().unwrap();
        assert_eq!("issued-token", token.id);
        assert_eq!("uid", token.user_id);
        assert_eq!(Some("pid".into()), token.project_id);

        assert!(
            client
                .list_roles(&RoleListParameters::default())
                .await
                .unwrap()
                .is_empty()
        );
        roles.assert_async().await;
    }

    #[tokio::test]
    async fn test_password_auth_by_project_id() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v3/auth/tokens")
                    .json_body_partial(r#"{"auth": {"scope": {"project": {"id": "pid"}}}}"#);
                then.status(201)
                    .header("x-subject-token", "issued-token")
                    .header("content-type", "application/json")
                    .json_body(json!({"token": {
                        "expires_at": "2030-01-01T00:00:00Z",
                        "user": {"id": "uid"}
                    }}));
            })
            .await;

        HttpClient::connect(&password_credentials(&server, Some("pid")))
            .await
            .unwrap();
        auth.assert_async().await;
    }

    #[tokio::test]
    async fn test_password_auth_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/auth/tokens");
                then.status(401)
                    .header("content-type", "application/json")
                    .json_body(json!({"error": {
                        "code": 401,
                        "message": "The request you have made requires authentication.",
                        "title": "Unauthorized"
                    }}));
            })
            .await;

        match HttpClient::connect(&password_credentials(&server, None)).await {
            Err(AuthError::Rejected { status, message }) => {
                assert_eq!(401, status);
                assert_eq!("The request you have made requires authentication.", message);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_password_auth_without_subject_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/auth/tokens");
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"token": {
                        "expires_at": "2030-01-01T00:00:00Z",
                        "user": {"id": "uid"}
                    }}));
            })
            .await;

        assert!(matches!(
            HttpClient::connect(&password_credentials(&server, None)).await,
            Err(AuthError::MissingSubjectToken)
        ));
    }

    #[tokio::test]
    async fn test_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("DELETE").path("/v3/roles/r1");
                then.status(403)
                    .header("content-type", "application/json")
                    .json_body(json!({"error": {"code": 403, "message": "forbidden"}}));
            })
            .await;
        let client = token_client(&server).await;

        match client.delete_role("r1").await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(403, status);
                assert_eq!("forbidden", message);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
