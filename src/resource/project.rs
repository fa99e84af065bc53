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

use tracing::error;
use validator::Validate;

use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient, Listing, deleted_message, into_listing};
use crate::resolver::{EntityKind, EntityRef, NameIndex};
use crate::resource::types::*;

impl<C: KeystoneClient> Keystone<C> {
    /// Resolve the project ID, optionally looking the name up within the
    /// domain.
    pub async fn resolve_project_id(
        &self,
        project: &EntityRef,
        domain_id: Option<&str>,
    ) -> Result<String, KeystoneOpsError> {
        if let Some(id) = &project.id {
            return Ok(id.clone());
        }
        let name = project
            .name
            .as_deref()
            .ok_or(KeystoneOpsError::Unresolved(EntityKind::Project))?;
        let projects = self
            .client
            .list_projects(&ProjectListParameters {
                domain_id: domain_id.map(Into::into),
                name: Some(name.into()),
            })
            .await?;
        NameIndex::new(&projects).resolve(EntityKind::Project, name)
    }

    /// List projects keyed by their name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn project_list(
        &self,
        domain: Option<&str>,
    ) -> Result<Listing<Project>, KeystoneOpsError> {
        let projects = self
            .client
            .list_projects(&ProjectListParameters {
                domain_id: domain.map(Into::into),
                name: None,
            })
            .await?;
        Ok(into_listing(projects, |project| project.name.clone()))
    }

    /// Get a single project.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn project_get(
        &self,
        project: &EntityRef,
        domain: Option<&str>,
    ) -> Result<Project, KeystoneOpsError> {
        let project_id = self.resolve_project_id(project, domain).await?;
        match self.client.get_project(&project_id).await? {
            Some(project) => Ok(project),
            None => {
                let err = KeystoneOpsError::not_found(EntityKind::Project, project_id);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Create a project and return it as freshly read from the service.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn project_create(
        &self,
        project: ProjectCreate,
    ) -> Result<Project, KeystoneOpsError> {
        project.validate()?;
        let created = self.client.create_project(project).await?;
        self.project_get(&EntityRef::id(created.id), None).await
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn project_delete(&self, project: &EntityRef) -> Result<String, KeystoneOpsError> {
        let project_id = self.resolve_project_id(project, None).await?;
        self.client.delete_project(&project_id).await?;
        Ok(deleted_message("Project ID", &project_id, project.name.as_deref()))
    }

    /// Update project attributes, keeping the current values of the attributes
    /// not present in the `update`.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn project_update(
        &self,
        project: &EntityRef,
        update: ProjectUpdate,
    ) -> Result<String, KeystoneOpsError> {
        let project_id = self.resolve_project_id(project, None).await?;
        let current = self
            .client
            .get_project(&project_id)
            .await?
            .ok_or_else(|| KeystoneOpsError::not_found(EntityKind::Project, &project_id))?;
        let update = ProjectUpdate {
            name: update.name.or(Some(current.name)),
            description: update.description.or(current.description),
            enabled: update.enabled.or(Some(current.enabled)),
            domain_id: update.domain_id,
        };
        self.client.update_project(&project_id, update).await?;
        Ok(format!("Info updated for project ID {project_id}"))
    }
}
