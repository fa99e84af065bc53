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
use reqwest::header::HeaderValue;
use secrecy::ExposeSecret;

use openstack_keystone_api_types::v3::auth::token::TokenResponse;

use super::error::ClientError;
use super::{HttpClient, SUBJECT_TOKEN, check, token_info};
use crate::token::{TokenApi, TokenInfo};

#[async_trait]
impl TokenApi for HttpClient {
    /// Return the token of the session. Static tokens are validated against
    /// the service.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_token(&self) -> Result<TokenInfo, ClientError> {
        if let Some(info) = &self.token_info {
            return Ok(info.clone());
        }
        let mut subject = HeaderValue::from_str(self.token.expose_secret())?;
        subject.set_sensitive(true);
        let rsp = self
            .client
            .get(self.url("v3/auth/tokens")?)
            .header(SUBJECT_TOKEN, subject)
            .send()
            .await?;
        let body: TokenResponse = check(rsp).await?.json().await?;
        Ok(token_info(&self.token, body.token))
    }
}
