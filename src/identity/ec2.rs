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
//! EC2 credential operations.

use tracing::error;

use crate::error::KeystoneOpsError;
use crate::identity::types::*;
use crate::keystone::{Keystone, KeystoneClient, Listing, into_listing};
use crate::resolver::{EntityKind, EntityRef};

fn require_access(access: &str) -> Result<(), KeystoneOpsError> {
    if access.is_empty() {
        return Err(KeystoneOpsError::MissingArgument("Access key".into()));
    }
    Ok(())
}

impl<C: KeystoneClient> Keystone<C> {
    async fn resolve_credential_owner(&self, user: &EntityRef) -> Result<String, KeystoneOpsError> {
        self.resolve_user_id(user, None)
            .await
            .map_err(KeystoneOpsError::into_credential_owner)
    }

    /// Issue EC2 credentials of the user for the project.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn ec2_credentials_create(
        &self,
        user: &EntityRef,
        project: &EntityRef,
    ) -> Result<Ec2Credential, KeystoneOpsError> {
        let user_id = self.resolve_credential_owner(user).await?;
        let project_id = self
            .resolve_project_id(project, None)
            .await
            .map_err(KeystoneOpsError::into_credential_owner)?;
        Ok(self
            .client
            .create_ec2_credential(&user_id, &project_id)
            .await?)
    }

    /// Delete the EC2 credential of the user.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn ec2_credentials_delete(
        &self,
        user: &EntityRef,
        access: &str,
    ) -> Result<String, KeystoneOpsError> {
        require_access(access)?;
        let user_id = self.resolve_credential_owner(user).await?;
        self.client.delete_ec2_credential(&user_id, access).await?;
        Ok(format!(
            "ec2 key \"{access}\" deleted under user id \"{user_id}\""
        ))
    }

    /// Get the EC2 credential of the user by the access key.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn ec2_credentials_get(
        &self,
        user: &EntityRef,
        access: &str,
    ) -> Result<Ec2Credential, KeystoneOpsError> {
        require_access(access)?;
        let user_id = self.resolve_credential_owner(user).await?;
        match self.client.get_ec2_credential(&user_id, access).await? {
            Some(credential) => Ok(credential),
            None => {
                let err = KeystoneOpsError::not_found(EntityKind::Ec2Credential, access);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// List EC2 credentials of the user keyed by the access key.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn ec2_credentials_list(
        &self,
        user: &EntityRef,
    ) -> Result<Listing<Ec2Credential>, KeystoneOpsError> {
        let user_id = self.resolve_credential_owner(user).await?;
        let credentials = self.client.list_ec2_credentials(&user_id).await?;
        Ok(into_listing(credentials, |cred| cred.access.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockKeystoneClient;
    use crate::resource::{Project, ProjectListParameters};

    fn credential(access: &str) -> Ec2Credential {
        Ec2Credential {
            access: access.into(),
            secret: format!("{access}-secret"),
            project_id: "p1".into(),
            user_id: "u1".into(),
        }
    }

    #[tokio::test]
    async fn test_create_by_names() {
        let mut client = MockKeystoneClient::default();
        client.expect_list_users().returning(|_| {
            Ok(vec![User {
                id: "u1".into(),
                name: "alice".into(),
                enabled: true,
                ..Default::default()
            }])
        });
        client
            .expect_list_projects()
            .withf(|params: &ProjectListParameters| params.name.as_deref() == Some("demo"))
            .returning(|_| {
                Ok(vec![Project {
                    id: "p1".into(),
                    name: "demo".into(),
                    enabled: true,
                    ..Default::default()
                }])
            });
        client
            .expect_create_ec2_credential()
            .withf(|user_id: &'_ str, project_id: &'_ str| user_id == "u1" && project_id == "p1")
            .returning(|_, _| Ok(credential("ak")));
        let keystone = Keystone::new(client);

        let cred = keystone
            .ec2_credentials_create(&EntityRef::name("alice"), &EntityRef::name("demo"))
            .await
            .unwrap();
        assert_eq!("ak", cred.access);
        assert_eq!("ak-secret", cred.secret);
    }

    #[tokio::test]
    async fn test_create_unresolved() {
        let mut client = MockKeystoneClient::default();
        client.expect_list_projects().returning(|_| Ok(vec![]));
        let keystone = Keystone::new(client);

        let err = keystone
            .ec2_credentials_create(&EntityRef::default(), &EntityRef::name("demo"))
            .await
            .unwrap_err();
        assert_eq!("Could not resolve User ID", err.to_string());

        let err = keystone
            .ec2_credentials_create(&EntityRef::id("u1"), &EntityRef::name("demo"))
            .await
            .unwrap_err();
        assert_eq!("Could not resolve Project ID", err.to_string());
    }

    #[tokio::test]
    async fn test_delete() {
        let mut client = MockKeystoneClient::default();
        client
            .expect_delete_ec2_credential()
            .withf(|user_id: &'_ str, access: &'_ str| user_id == "u1" && access == "ak")
            .times(1)
            .returning(|_, _| Ok(()));
        let keystone = Keystone::new(client);

        assert_eq!(
            "ec2 key \"ak\" deleted under user id \"u1\"",
            keystone
                .ec2_credentials_delete(&EntityRef::id("u1"), "ak")
                .await
                .unwrap()
        );
        assert!(matches!(
            keystone
                .ec2_credentials_delete(&EntityRef::id("u1"), "")
                .await,
            Err(KeystoneOpsError::MissingArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let mut client = MockKeystoneClient::default();
        client
            .expect_get_ec2_credential()
            .withf(|_, access: &'_ str| access == "ak")
            .returning(|_, _| Ok(Some(credential("ak"))));
        client
            .expect_get_ec2_credential()
            .returning(|_, _| Ok(None));
        client
            .expect_list_ec2_credentials()
            .withf(|user_id: &'_ str| user_id == "u1")
            .returning(|_| Ok(vec![credential("ak"), credential("bk")]));
        let keystone = Keystone::new(client);
        let owner = EntityRef::id("u1");

        assert_eq!(
            credential("ak"),
            keystone.ec2_credentials_get(&owner, "ak").await.unwrap()
        );
        assert_eq!(
            "Could not find ec2 credential 'zz'",
            keystone
                .ec2_credentials_get(&owner, "zz")
                .await
                .unwrap_err()
                .to_string()
        );
        let listing = keystone.ec2_credentials_list(&owner).await.unwrap();
        assert_eq!(vec!["ak", "bk"], listing.keys().map(String::as_str).collect::<Vec<_>>());
    }
}
