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

use crate::assignment::types::*;
use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient, Listing};
use crate::resolver::EntityRef;

/// Resolved user, project and role of the grant as (id, name) pairs.
struct Grant {
    user: (String, String),
    project: (String, String),
    role: (String, String),
}

impl Grant {
    fn assignment(&self) -> Assignment {
        Assignment {
            role_id: self.role.0.clone(),
            user_id: self.user.0.clone(),
            project_id: self.project.0.clone(),
        }
    }
}

impl<C: KeystoneClient> Keystone<C> {
    /// Resolve all parties of the grant. The name is looked up when given,
    /// otherwise it is read from the entity referenced by the ID.
    async fn resolve_grant(
        &self,
        user: &EntityRef,
        project: &EntityRef,
        role: &EntityRef,
    ) -> Result<Grant, KeystoneOpsError> {
        let user = self.user_get(user, None).await?;
        let project = self.project_get(project, None).await?;
        let role = self.role_get(role).await?;
        Ok(Grant {
            user: (user.id, user.name),
            project: (project.id, project.name),
            role: (role.id, role.name),
        })
    }

    /// Grant the role to the user on the project.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_role_add(
        &self,
        user: &EntityRef,
        project: &EntityRef,
        role: &EntityRef,
    ) -> Result<String, KeystoneOpsError> {
        let grant = self.resolve_grant(user, project, role).await?;
        self.client.grant_role(&grant.assignment()).await?;
        Ok(format!(
            "\"{}\" role added for user \"{}\" for \"{}\" project",
            grant.role.1, grant.user.1, grant.project.1
        ))
    }

    /// Revoke the role from the user on the project.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_role_remove(
        &self,
        user: &EntityRef,
        project: &EntityRef,
        role: &EntityRef,
    ) -> Result<String, KeystoneOpsError> {
        let grant = self.resolve_grant(user, project, role).await?;
        self.client.revoke_role(&grant.assignment()).await?;
        Ok(format!(
            "\"{}\" role removed for user \"{}\" under \"{}\" project",
            grant.role.1, grant.user.1, grant.project.1
        ))
    }

    /// List roles of the user on the project keyed by the role name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn user_role_list(
        &self,
        user: &EntityRef,
        project: &EntityRef,
    ) -> Result<Listing<RoleAssignment>, KeystoneOpsError> {
        let user_id = self.resolve_user_id(user, None).await?;
        let project_id = self.resolve_project_id(project, None).await?;
        let mut listing = Listing::new();
        for role in self
            .client
            .list_user_project_roles(&user_id, &project_id)
            .await?
        {
            listing.entry(role.name.clone()).or_insert(RoleAssignment {
                id: role.id,
                name: role.name,
                user_id: user_id.clone(),
                project_id: project_id.clone(),
            });
        }
        Ok(listing)
    }
}
