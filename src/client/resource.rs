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

use openstack_keystone_api_types::v3::project as api;

use super::HttpClient;
use super::error::ClientError;
use crate::resource::types::*;

impl From<api::Project> for Project {
    fn from(value: api::Project) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            enabled: value.enabled,
            domain_id: value.domain_id,
        }
    }
}

#[async_trait]
impl ResourceApi for HttpClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_projects(
        &self,
        params: &ProjectListParameters,
    ) -> Result<Vec<Project>, ClientError> {
        let query = api::ProjectListParameters {
            domain_id: params.domain_id.clone(),
            name: params.name.clone(),
        };
        let list: api::ProjectList = self.get("v3/projects", &query).await?;
        Ok(list.projects.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_project<'a>(&self, project_id: &'a str) -> Result<Option<Project>, ClientError> {
        Ok(self
            .get_optional::<api::ProjectResponse>(&format!("v3/projects/{project_id}"))
            .await?
            .map(|rsp| rsp.project.into()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_project(&self, project: ProjectCreate) -> Result<Project, ClientError> {
        let rsp: api::ProjectResponse = self
            .post(
                "v3/projects",
                &api::ProjectCreateRequest {
                    project: api::ProjectCreate {
                        description: project.description,
                        domain_id: project.domain_id,
                        enabled: project.enabled,
                        name: project.name,
                    },
                },
            )
            .await?;
        Ok(rsp.project.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn update_project<'a>(
        &self,
        project_id: &'a str,
        project: ProjectUpdate,
    ) -> Result<Project, ClientError> {
        let rsp: api::ProjectResponse = self
            .patch(
                &format!("v3/projects/{project_id}"),
                &api::ProjectUpdateRequest {
                    project: api::ProjectUpdate {
                        description: project.description,
                        domain_id: project.domain_id,
                        enabled: project.enabled,
                        name: project.name,
                    },
                },
            )
            .await?;
        Ok(rsp.project.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_project<'a>(&self, project_id: &'a str) -> Result<(), ClientError> {
        self.delete(&format!("v3/projects/{project_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::client::tests::token_client;

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/projects").json_body(json!({
                    "project": {"name": "t1", "description": "test", "enabled": true}
                }));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"project": {
                        "id": "p1",
                        "name": "t1",
                        "description": "test",
                        "domain_id": "default",
                        "enabled": true
                    }}));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method("GET").path("/v3/projects/p1");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"project": {
                        "id": "p1",
                        "name": "t1",
                        "domain_id": "default",
                        "enabled": true
                    }}));
            })
            .await;
        let client = token_client(&server).await;

        let created = client
            .create_project(
                ProjectCreateBuilder::default()
                    .name("t1")
                    .description("test")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        let fetched = client.get_project(&created.id).await.unwrap().unwrap();
        assert_eq!("t1", fetched.name);
        assert_eq!(Some("default".to_string()), fetched.domain_id);
        create.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/v3/projects/p1")
                    .json_body(json!({"project": {"name": "t2", "enabled": false}}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"project": {"id": "p1", "name": "t2", "enabled": false}}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/v3/projects/p1");
                then.status(204);
            })
            .await;
        let client = token_client(&server).await;

        let updated = client
            .update_project(
                "p1",
                ProjectUpdateBuilder::default()
                    .name("t2")
                    .enabled(false)
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(!updated.enabled);
        client.delete_project("p1").await.unwrap();
        update.assert_async().await;
        delete.assert_async().await;
    }
}
