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
use mockall::mock;

use super::error::ClientError;
use crate::assignment::types::*;
use crate::auth::error::AuthError;
use crate::auth::{Connector, Credentials};
use crate::catalog::types::*;
use crate::identity::types::*;
use crate::resource::types::*;
use crate::token::{TokenApi, TokenInfo};

mock! {
    pub KeystoneClient {}

    #[async_trait]
    impl IdentityApi for KeystoneClient {
        async fn list_users(&self, params: &UserListParameters) -> Result<Vec<User>, ClientError>;

        async fn get_user<'a>(&self, user_id: &'a str) -> Result<Option<User>, ClientError>;

        async fn create_user(&self, user: UserCreate) -> Result<User, ClientError>;

        async fn update_user<'a>(
            &self,
            user_id: &'a str,
            user: UserUpdate,
        ) -> Result<User, ClientError>;

        async fn delete_user<'a>(&self, user_id: &'a str) -> Result<(), ClientError>;

        async fn create_ec2_credential<'a>(
            &self,
            user_id: &'a str,
            project_id: &'a str,
        ) -> Result<Ec2Credential, ClientError>;

        async fn get_ec2_credential<'a>(
            &self,
            user_id: &'a str,
            access: &'a str,
        ) -> Result<Option<Ec2Credential>, ClientError>;

        async fn list_ec2_credentials<'a>(
            &self,
            user_id: &'a str,
        ) -> Result<Vec<Ec2Credential>, ClientError>;

        async fn delete_ec2_credential<'a>(
            &self,
            user_id: &'a str,
            access: &'a str,
        ) -> Result<(), ClientError>;
    }

    #[async_trait]
    impl ResourceApi for KeystoneClient {
        async fn list_projects(
            &self,
            params: &ProjectListParameters,
        ) -> Result<Vec<Project>, ClientError>;

        async fn get_project<'a>(&self, project_id: &'a str) -> Result<Option<Project>, ClientError>;

        async fn create_project(&self, project: ProjectCreate) -> Result<Project, ClientError>;

        async fn update_project<'a>(
            &self,
            project_id: &'a str,
            project: ProjectUpdate,
        ) -> Result<Project, ClientError>;

        async fn delete_project<'a>(&self, project_id: &'a str) -> Result<(), ClientError>;
    }

    #[async_trait]
    impl AssignmentApi for KeystoneClient {
        async fn list_roles(&self, params: &RoleListParameters) -> Result<Vec<Role>, ClientError>;

        async fn get_role<'a>(&self, role_id: &'a str) -> Result<Option<Role>, ClientError>;

        async fn create_role(&self, role: RoleCreate) -> Result<Role, ClientError>;

        async fn delete_role<'a>(&self, role_id: &'a str) -> Result<(), ClientError>;

        async fn list_user_project_roles<'a>(
            &self,
            user_id: &'a str,
            project_id: &'a str,
        ) -> Result<Vec<Role>, ClientError>;

        async fn grant_role(&self, assignment: &Assignment) -> Result<(), ClientError>;

        async fn revoke_role(&self, assignment: &Assignment) -> Result<(), ClientError>;
    }

    #[async_trait]
    impl CatalogApi for KeystoneClient {
        async fn list_services(
            &self,
            params: &ServiceListParameters,
        ) -> Result<Vec<Service>, ClientError>;

        async fn get_service<'a>(&self, service_id: &'a str) -> Result<Option<Service>, ClientError>;

        async fn create_service(&self, service: ServiceCreate) -> Result<Service, ClientError>;

        async fn delete_service<'a>(&self, service_id: &'a str) -> Result<(), ClientError>;

        async fn list_endpoints(
            &self,
            params: &EndpointListParameters,
        ) -> Result<Vec<Endpoint>, ClientError>;

        async fn create_endpoint(&self, endpoint: EndpointCreate) -> Result<Endpoint, ClientError>;

        async fn delete_endpoint<'a>(&self, endpoint_id: &'a str) -> Result<(), ClientError>;
    }

    #[async_trait]
    impl TokenApi for KeystoneClient {
        async fn get_token(&self) -> Result<TokenInfo, ClientError>;
    }
}

mock! {
    pub Connector {}

    #[async_trait]
    impl Connector for Connector {
        type Client = MockKeystoneClient;

        async fn connect(&self, credentials: &Credentials) -> Result<MockKeystoneClient, AuthError>;
    }
}
