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

pub mod ec2;
pub mod user;

use async_trait::async_trait;

use crate::client::error::ClientError;
pub use crate::identity::types::ec2::*;
pub use crate::identity::types::user::*;

/// Users and their EC2 credentials.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// List users.
    async fn list_users(&self, params: &UserListParameters) -> Result<Vec<User>, ClientError>;

    /// Get single user by ID.
    async fn get_user<'a>(&self, user_id: &'a str) -> Result<Option<User>, ClientError>;

    /// Create user.
    async fn create_user(&self, user: UserCreate) -> Result<User, ClientError>;

    /// Update the user. Only the attributes set in the `user` are changed.
    async fn update_user<'a>(&self, user_id: &'a str, user: UserUpdate)
    -> Result<User, ClientError>;

    /// Delete user.
    async fn delete_user<'a>(&self, user_id: &'a str) -> Result<(), ClientError>;

    /// Issue new EC2 credentials of the user for the project.
    async fn create_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<Ec2Credential, ClientError>;

    /// Get the EC2 credential of the user by the access key.
    async fn get_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        access: &'a str,
    ) -> Result<Option<Ec2Credential>, ClientError>;

    /// List EC2 credentials of the user.
    async fn list_ec2_credentials<'a>(
        &self,
        user_id: &'a str,
    ) -> Result<Vec<Ec2Credential>, ClientError>;

    /// Delete the EC2 credential of the user.
    async fn delete_ec2_credential<'a>(
        &self,
        user_id: &'a str,
        access: &'a str,
    ) -> Result<(), ClientError>;
}
