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
//! # Authentication
//!
//! Connection settings resolve into [`Credentials`], which a [`Connector`]
//! turns into an authenticated identity service client.

use async_trait::async_trait;
use secrecy::SecretString;
use url::Url;

pub mod error;

use crate::config::{ConfigStore, ConnectionArgs};
use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient};
use error::AuthError;

/// Resolved session credentials.
#[derive(Clone, Debug)]
pub enum Credentials {
    /// Pre-issued token used against the endpoint.
    Token {
        token: SecretString,
        endpoint: Url,
    },
    /// User password authentication scoped to the project.
    Password(PasswordCredentials),
}

#[derive(Clone, Debug)]
pub struct PasswordCredentials {
    pub username: String,
    pub password: SecretString,
    /// Project name, used when the `project_id` is not set.
    pub project_name: String,
    pub project_id: Option<String>,
    pub auth_url: Url,
    /// Skip the TLS certificate verification.
    pub insecure: bool,
}

/// Establishes authenticated sessions.
#[async_trait]
pub trait Connector: Send + Sync {
    type Client: KeystoneClient;

    /// Authenticate with the credentials.
    async fn connect(&self, credentials: &Credentials) -> Result<Self::Client, AuthError>;
}

/// Resolve the credentials for the profile and authenticate.
#[tracing::instrument(level = "info", skip(connector, store, args))]
pub async fn authenticate<C: Connector>(
    connector: &C,
    store: &dyn ConfigStore,
    profile: Option<&str>,
    args: &ConnectionArgs,
) -> Result<Keystone<C::Client>, KeystoneOpsError> {
    let credentials = args.credentials(store, profile)?;
    Ok(Keystone::new(connector.connect(&credentials).await?))
}
