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
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;
use crate::error::BuilderError;

/// Token of the session.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct TokenInfo {
    /// The token ID.
    pub id: String,
    /// The date and time when the token expires.
    pub expires: DateTime<Utc>,
    /// The ID of the user owning the token.
    pub user_id: String,
    /// The project the token is scoped to.
    #[builder(default)]
    pub project_id: Option<String>,
}

#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Get the token the session is authenticated with.
    async fn get_token(&self) -> Result<TokenInfo, ClientError>;
}
