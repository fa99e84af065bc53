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

use openstack_keystone_api_types::v3::role as api;

use super::error::ClientError;
use super::{HttpClient, NO_QUERY};
use crate::assignment::types::*;

impl From<api::Role> for Role {
    fn from(value: api::Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

fn grant_path(assignment: &Assignment) -> String {
    format!(
        "v3/projects/{}/users/{}/roles/{}",
        assignment.project_id, assignment.user_id, assignment.role_id
    )
}

#[async_trait]
impl AssignmentApi for HttpClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_roles(&self, params: &RoleListParameters) -> Result<Vec<Role>, ClientError> {
        let query = api::RoleListParameters {
            name: params.name.clone(),
        };
        let list: api::RoleList = self.get("v3/roles", &query).await?;
        Ok(list.roles.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_role<'a>(&self, role_id: &'a str) -> Result<Option<Role>, ClientError> {
        Ok(self
            .get_optional::<api::RoleResponse>(&format!("v3/roles/{role_id}"))
            .await?
            .map(|rsp| rsp.role.into()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_role(&self, role: RoleCreate) -> Result<Role, ClientError> {
        let rsp: api::RoleResponse = self
            .post(
                "v3/roles",
                &api::RoleCreateRequest {
                    role: api::RoleCreate { name: role.name },
                },
            )
            .await?;
        Ok(rsp.role.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_role<'a>(&self, role_id: &'a str) -> Result<(), ClientError> {
        self.delete(&format!("v3/roles/{role_id}")).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_user_project_roles<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<Vec<Role>, ClientError> {
        let list: api::RoleList = self
            .get(
                &format!("v3/projects/{project_id}/users/{user_id}/roles"),
                NO_QUERY,
            )
            .await?;
        Ok(list.roles.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn grant_role(&self, assignment: &Assignment) -> Result<(), ClientError> {
        self.put(&grant_path(assignment)).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn revoke_role(&self, assignment: &Assignment) -> Result<(), ClientError> {
        self.delete(&grant_path(assignment)).await
    }
}
