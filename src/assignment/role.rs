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

use tracing::{debug, error};
use validator::Validate;

use crate::assignment::types::*;
use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient, Listing, deleted_message, into_listing};
use crate::resolver::{EntityKind, EntityRef, NameIndex};

impl<C: KeystoneClient> Keystone<C> {
    /// Resolve the role ID.
    pub async fn resolve_role_id(&self, role: &EntityRef) -> Result<String, KeystoneOpsError> {
        if let Some(id) = &role.id {
            return Ok(id.clone());
        }
        let name = role
            .name
            .as_deref()
            .ok_or(KeystoneOpsError::Unresolved(EntityKind::Role))?;
        let roles = self
            .client
            .list_roles(&RoleListParameters {
                name: Some(name.into()),
            })
            .await?;
        NameIndex::new(&roles).resolve(EntityKind::Role, name)
    }

    /// List roles keyed by their name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn role_list(&self) -> Result<Listing<Role>, KeystoneOpsError> {
        let roles = self
            .client
            .list_roles(&RoleListParameters::default())
            .await?;
        Ok(into_listing(roles, |role| role.name.clone()))
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn role_get(&self, role: &EntityRef) -> Result<Role, KeystoneOpsError> {
        let role_id = self.resolve_role_id(role).await?;
        match self.client.get_role(&role_id).await? {
            Some(role) => Ok(role),
            None => {
                let err = KeystoneOpsError::not_found(EntityKind::Role, role_id);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Create the role unless the role with the same name exists.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn role_create(&self, role: RoleCreate) -> Result<Role, KeystoneOpsError> {
        role.validate()?;
        match self.role_get(&EntityRef::name(&role.name)).await {
            Ok(existing) => {
                debug!("role {} already exists with id {}", existing.name, existing.id);
                return Err(KeystoneOpsError::AlreadyExists {
                    kind: EntityKind::Role,
                    name: role.name,
                });
            }
            Err(KeystoneOpsError::Unresolved(_)) => {}
            Err(other) => return Err(other),
        }
        let created = self.client.create_role(role).await?;
        self.role_get(&EntityRef::id(created.id)).await
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn role_delete(&self, role: &EntityRef) -> Result<String, KeystoneOpsError> {
        let role_id = self.resolve_role_id(role).await?;
        self.client.delete_role(&role_id).await?;
        Ok(deleted_message("Role ID", &role_id, role.name.as_deref()))
    }
}
