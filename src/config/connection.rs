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
//! Connection settings resolution.

use derive_builder::Builder;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ConfigStore, parse_bool};
use crate::auth::error::AuthError;
use crate::auth::{Credentials, PasswordCredentials};

pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "ADMIN";
pub const DEFAULT_PROJECT: &str = "admin";
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:35357/v2.0/";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:35357/v2.0";

/// Explicit overrides of the connection settings.
///
/// Every set field takes precedence over the configuration store.
#[derive(Builder, Clone, Debug, Default)]
#[builder(setter(strip_option, into))]
pub struct ConnectionArgs {
    #[builder(default)]
    pub user: Option<String>,
    #[builder(default)]
    pub password: Option<SecretString>,
    #[builder(default)]
    pub project: Option<String>,
    #[builder(default)]
    pub project_id: Option<String>,
    #[builder(default)]
    pub auth_url: Option<String>,
    #[builder(default)]
    pub insecure: Option<bool>,
    #[builder(default)]
    pub token: Option<SecretString>,
    #[builder(default)]
    pub endpoint: Option<String>,
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(value) => Some(value),
        other => Some(other.to_string()),
    }
}


/// Resolve the setting `key`: the explicit `value`, the profile scoped
/// setting, the global setting and the `default` in this order.
pub fn resolve(
    store: &dyn ConfigStore,
    key: &str,
    value: Option<String>,
    profile: Option<&str>,
    default: Option<&str>,
) -> Option<String> {
    value
        .or_else(|| {
            profile
                .and_then(|profile| store.get(&format!("{profile}:keystone.{key}")))
                .and_then(render)
        })
        .or_else(|| store.get(&format!("keystone.{key}")).and_then(render))
        .or_else(|| default.map(Into::into))
}

fn parse_url(key: &str, url: Option<String>, default: &str) -> Result<Url, AuthError> {
    let url = url.unwrap_or_else(|| default.to_string());
    url.parse().map_err(|source| AuthError::InvalidUrl {
        key: key.into(),
        source,
    })
}

impl ConnectionArgs {
    /// Resolve the session credentials.
    ///
    /// A non-empty token selects the token authentication, otherwise the
    /// password authentication is used.
    pub fn credentials(
        &self,
        store: &dyn ConfigStore,
        profile: Option<&str>,
    ) -> Result<Credentials, AuthError> {
        let get = |key: &str, value: Option<String>, default: Option<&str>| {
            resolve(store, key, value, profile, default)
        };
        let secret = |value: &Option<SecretString>| {
            value
                .as_ref()
                .map(|secret| secret.expose_secret().to_string())
        };

        let token = get("token", secret(&self.token), None).filter(|token| !token.is_empty());
        if let Some(token) = token {
            debug!("using token authentication");
            return Ok(Credentials::Token {
                token: SecretString::from(token),
                endpoint: parse_url(
                    "endpoint",
                    get("endpoint", self.endpoint.clone(), None),
                    DEFAULT_ENDPOINT,
                )?,
            });
        }

        let insecure = get(
            "insecure",
            self.insecure.map(|insecure| insecure.to_string()),
            Some("false"),
        )
        .is_some_and(|insecure| parse_bool(&insecure) == Some(true));
        Ok(Credentials::Password(PasswordCredentials {
            username: get("user", self.user.clone(), Some(DEFAULT_USER)).unwrap_or_default(),
            password: SecretString::from(
                get("password", secret(&self.password), Some(DEFAULT_PASSWORD))
                    .unwrap_or_default(),
            ),
            project_name: get("project", self.project.clone(), Some(DEFAULT_PROJECT))
                .unwrap_or_default(),
            project_id: get("project_id", self.project_id.clone(), None),
            auth_url: parse_url(
                "auth_url",
                get("auth_url", self.auth_url.clone(), None),
                DEFAULT_AUTH_URL,
            )?,
            insecure,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    fn store() -> HashMap<String, Value> {
        HashMap::from([
            ("keystone.user".to_string(), json!("global-user")),
            ("keystone.password".to_string(), json!("global-pass")),
            ("openstack1:keystone.user".to_string(), json!("profile-user")),
            ("openstack1:keystone.insecure".to_string(), json!(true)),
            ("openstack2:keystone.token".to_string(), json!("")),
            ("openstack3:keystone.token".to_string(), json!("tkn")),
            ("openstack3:keystone.endpoint".to_string(), json!("http://ep:5000/v3")),
        ])
    }

    #[test]
    fn test_precedence() {
        let store = store();
        assert_eq!(
            Some("override".to_string()),
            resolve(&store, "user", Some("override".into()), Some("openstack1"), Some("admin"))
        );
        assert_eq!(
            Some("profile-user".to_string()),
            resolve(&store, "user", None, Some("openstack1"), Some("admin"))
        );
        assert_eq!(
            Some("global-user".to_string()),
            resolve(&store, "user", None, Some("openstack9"), Some("admin"))
        );
        assert_eq!(
            Some("global-user".to_string()),
            resolve(&store, "user", None, None, Some("admin"))
        );
        assert_eq!(
            Some("admin".to_string()),
            resolve(&store, "project", None, None, Some("admin"))
        );
        assert_eq!(None, resolve(&store, "project_id", None, None, None));
        assert_eq!(
            Some("true".to_string()),
            resolve(&store, "insecure", None, Some("openstack1"), Some("false"))
        );
    }

    #[test]
    fn test_password_credentials_defaults() {
        let store = HashMap::<String, Value>::new();
        match ConnectionArgs::default().credentials(&store, None).unwrap() {
            Credentials::Password(creds) => {
                assert_eq!("admin", creds.username);
                assert_eq!("ADMIN", creds.password.expose_secret());
                assert_eq!("admin", creds.project_name);
                assert_eq!(None, creds.project_id);
                assert_eq!("http://127.0.0.1:35357/v2.0/", creds.auth_url.as_str());
                assert!(!creds.insecure);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_password_credentials_profile() {
        let store = store();
        let args = ConnectionArgsBuilder::default()
            .project_id("pid")
            .build()
            .unwrap();
        match args.credentials(&store, Some("openstack1")).unwrap() {
            Credentials::Password(creds) => {
                assert_eq!("profile-user", creds.username);
                assert_eq!("global-pass", creds.password.expose_secret());
                assert_eq!(Some("pid".to_string()), creds.project_id);
                assert!(creds.insecure);
            }
            other => panic!("unexpected {other:?}"),
        }
        // Empty token keeps the password authentication.
        assert!(matches!(
            args.credentials(&store, Some("openstack2")).unwrap(),
            Credentials::Password(_)
        ));
    }

    #[test]
    fn test_token_credentials() {
        let store = store();
        match ConnectionArgs::default()
            .credentials(&store, Some("openstack3"))
            .unwrap()
        {
            Credentials::Token { token, endpoint } => {
                assert_eq!("tkn", token.expose_secret());
                assert_eq!("http://ep:5000/v3", endpoint.as_str());
            }
            other => panic!("unexpected {other:?}"),
        }

        let args = ConnectionArgsBuilder::default()
            .token("explicit")
            .build()
            .unwrap();
        match args.credentials(&HashMap::<String, Value>::new(), None).unwrap() {
            Credentials::Token { token, endpoint } => {
                assert_eq!("explicit", token.expose_secret());
                assert_eq!("http://127.0.0.1:35357/v2.0", endpoint.as_str());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_insecure_truthy() {
        for (value, expected) in [("yes", true), ("On", true), ("1", true), ("no", false)] {
            let store = HashMap::from([("keystone.insecure".to_string(), json!(value))]);
            match ConnectionArgs::default().credentials(&store, None).unwrap() {
                Credentials::Password(creds) => assert_eq!(expected, creds.insecure),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_url() {
        let args = ConnectionArgsBuilder::default()
            .auth_url("not a url")
            .build()
            .unwrap();
        assert!(matches!(
            args.credentials(&HashMap::<String, Value>::new(), None),
            Err(AuthError::InvalidUrl { key, .. }) if key == "auth_url"
        ));
    }
}
