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

pub mod project;

use async_trait::async_trait;

use crate::client::error::ClientError;
pub use crate::resource::types::project::*;

/// Projects.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List projects.
    async fn list_projects(
        &self,
        params: &ProjectListParameters,
    ) -> Result<Vec<Project>, ClientError>;

    /// Get single project by ID.
    async fn get_project<'a>(&self, project_id: &'a str) -> Result<Option<Project>, ClientError>;

    /// Create project.
    async fn create_project(&self, project: ProjectCreate) -> Result<Project, ClientError>;

    /// Update the project. Only the attributes set in the `project` are
    /// changed.
    async fn update_project<'a>(
        &self,
        project_id: &'a str,
        project: ProjectUpdate,
    ) -> Result<Project, ClientError>;

    /// Delete project.
    async fn delete_project<'a>(&self, project_id: &'a str) -> Result<(), ClientError>;
}
