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

pub mod assignment;
pub mod role;

use async_trait::async_trait;

pub use crate::assignment::types::assignment::*;
pub use crate::assignment::types::role::*;
use crate::client::error::ClientError;

/// Roles and their assignments.
#[async_trait]
pub trait AssignmentApi: Send + Sync {
    /// List roles.
    async fn list_roles(&self, params: &RoleListParameters) -> Result<Vec<Role>, ClientError>;

    /// Get single role by ID.
    async fn get_role<'a>(&self, role_id: &'a str) -> Result<Option<Role>, ClientError>;

    /// Create role.
    async fn create_role(&self, role: RoleCreate) -> Result<Role, ClientError>;

    /// Delete role.
    async fn delete_role<'a>(&self, role_id: &'a str) -> Result<(), ClientError>;

    /// List roles granted to the user on the project.
    async fn list_user_project_roles<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<Vec<Role>, ClientError>;

    /// Grant the role to the user on the project.
    async fn grant_role(&self, assignment: &Assignment) -> Result<(), ClientError>;

    /// Revoke the role from the user on the project.
    async fn revoke_role(&self, assignment: &Assignment) -> Result<(), ClientError>;
}
