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

use derive_builder::Builder;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;
use crate::resolver::Named;

/// User as returned by the operations.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct User {
    /// The user ID.
    pub id: String,

    /// The user name.
    pub name: String,

    /// The user email address.
    #[builder(default)]
    pub email: Option<String>,

    /// If the user is enabled, this value is true. If the user is disabled,
    /// this value is false.
    #[builder(default)]
    pub enabled: bool,

    /// The default project of the user. Only present when the user has one.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Named for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// User listing parameters.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserListParameters {
    /// Filter users by the default project.
    #[builder(default)]
    pub default_project_id: Option<String>,

    /// Filter users by the domain.
    #[builder(default)]
    pub domain_id: Option<String>,

    /// Filter users by the name.
    #[builder(default)]
    pub name: Option<String>,
}

/// New user data.
#[derive(Builder, Clone, Debug, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserCreate {
    /// The user name, unique within the owning domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The user password.
    pub password: SecretString,

    /// The user email address.
    #[builder(default)]
    #[validate(length(max = 255))]
    pub email: Option<String>,

    /// The default project of the user.
    #[builder(default)]
    #[validate(length(min = 1, max = 64))]
    pub project_id: Option<String>,

    /// The domain of the user.
    #[builder(default)]
    #[validate(length(min = 1, max = 64))]
    pub domain_id: Option<String>,

    /// Whether the user is enabled.
    #[builder(default = "true")]
    pub enabled: bool,
}

/// User update data.
///
/// Attributes that are not set are left unchanged.
#[derive(Builder, Clone, Debug, Default)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserUpdate {
    /// New user name.
    #[builder(default)]
    pub name: Option<String>,

    /// New email address.
    #[builder(default)]
    pub email: Option<String>,

    /// New password.
    #[builder(default)]
    pub password: Option<SecretString>,

    /// Enable or disable the user.
    #[builder(default)]
    pub enabled: Option<bool>,

    /// The domain of the user.
    #[builder(default)]
    pub domain_id: Option<String>,

    /// New default project of the user.
    #[builder(default)]
    pub project_id: Option<String>,
}
