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
//! User operations.

use tracing::error;
use validator::Validate;

use crate::error::KeystoneOpsError;
use crate::identity::types::*;
use crate::keystone::{Keystone, KeystoneClient, Listing, deleted_message, into_listing};
use crate::resolver::{EntityKind, EntityRef, NameIndex};

impl<C: KeystoneClient> Keystone<C> {
    /// Resolve the user ID, optionally looking the name up within the domain.
    pub async fn resolve_user_id(
        &self,
        user: &EntityRef,
        domain_id: Option<&str>,
    ) -> Result<String, KeystoneOpsError> {
        if let Some(id) = &user.id {
            return Ok(id.clone());
        }
        let name = user
            .name
            .as_deref()
            .ok_or(KeystoneOpsError::Unresolved(EntityKind::User))?;
        let users = self
            .client
            .list_users(&UserListParameters {
                domain_id: domain_id.map(Into::into),
                name: Some(name.into()),
                ..Default::default()
            })
            .await?;
        NameIndex::new(&users).resolve(EntityKind::User, name)
    }

    /// List users keyed by their name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_list(
        &self,
        default_project: Option<&str>,
        domain: Option<&str>,
    ) -> Result<Listing<User>, KeystoneOpsError> {
        let users = self
            .client
            .list_users(&UserListParameters {
                default_project_id: default_project.map(Into::into),
                domain_id: domain.map(Into::into),
                name: None,
            })
            .await?;
        Ok(into_listing(users, |user| user.name.clone()))
    }

    /// Get a single user.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_get(
        &self,
        user: &EntityRef,
        domain: Option<&str>,
    ) -> Result<User, KeystoneOpsError> {
        let user_id = self.resolve_user_id(user, domain).await?;
        match self.client.get_user(&user_id).await? {
            Some(user) => Ok(user),
            None => {
                let err = KeystoneOpsError::not_found(EntityKind::User, user_id);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Create a user and return it as freshly read from the service.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_create(&self, user: UserCreate) -> Result<User, KeystoneOpsError> {
        user.validate()?;
        let created = self.client.create_user(user).await?;
        self.user_get(&EntityRef::id(created.id), None).await
    }

    /// Delete a user.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_delete(&self, user: &EntityRef) -> Result<String, KeystoneOpsError> {
        let user_id = self.resolve_user_id(user, None).await?;
        self.client.delete_user(&user_id).await?;
        Ok(deleted_message("User ID", &user_id, user.name.as_deref()))
    }

    /// Update user attributes.
    ///
    /// Attributes not present in the `update` keep their current values.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_update(
        &self,
        user: &EntityRef,
        update: UserUpdate,
    ) -> Result<String, KeystoneOpsError> {
        let user_id = self
            .resolve_user_id(user, update.domain_id.as_deref())
            .await?;
        let current = self
            .client
            .get_user(&user_id)
            .await?
            .ok_or_else(|| KeystoneOpsError::not_found(EntityKind::User, &user_id))?;
        let update = UserUpdate {
            name: update.name.or(Some(current.name)),
            email: update.email.or(current.email),
            enabled: update.enabled.or(Some(current.enabled)),
            password: update.password,
            domain_id: update.domain_id,
            project_id: update.project_id,
        };
        self.client.update_user(&user_id, update).await?;
        Ok(format!("Info updated for user ID {user_id}"))
    }
}
