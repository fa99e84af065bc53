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
//! # Token
//!
//! A Keystone token is an alpha-numeric text string that enables access to
//! OpenStack APIs and resources. A token may be revoked at any time and is
//! valid for a finite duration.

pub mod types;

pub use types::*;

use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient};

impl<C: KeystoneClient> Keystone<C> {
    /// Return the token of the current session.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn token_get(&self) -> Result<TokenInfo, KeystoneOpsError> {
        Ok(self.client.get_token().await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::client::mock::MockKeystoneClient;

    #[tokio::test]
    async fn test_token_get() {
        let mut client = MockKeystoneClient::default();
        client.expect_get_token().returning(|| {
            Ok(TokenInfo {
                id: "tok".into(),
                expires: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
                user_id: "u1".into(),
                project_id: Some("p1".into()),
            })
        });
        let keystone = Keystone::new(client);

        let token = keystone.token_get().await.unwrap();
        assert_eq!("tok", token.id);
        assert_eq!(
            serde_json::json!({
                "id": "tok",
                "expires": "2030-01-01T00:00:00Z",
                "user_id": "u1",
                "project_id": "p1"
            }),
            serde_json::to_value(&token).unwrap()
        );
    }
}
