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
//! # User API types

use serde::{Deserialize, Serialize};

/// User object as returned by the identity service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// The ID of the default project for the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project_id: Option<String>,
    /// User domain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// User email address. This is an extra attribute of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// If the user is enabled, this value is true.
    #[serde(default = "crate::default_true")]
    pub enabled: bool,
    /// User ID.
    pub id: String,
    /// User name.
    pub name: String,
}

/// Complete response with the user data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserResponse {
    /// User object.
    pub user: User,
}

/// List of users.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserList {
    /// Collection of user objects.
    pub users: Vec<User>,
}

/// User creation data.
#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct UserCreate {
    /// The ID of the default project for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project_id: Option<String>,
    /// The ID of the domain of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// User email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the user is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The user name.
    pub name: String,
    /// The password for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// User create request body.
#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct UserCreateRequest {
    /// User object.
    pub user: UserCreate,
}

/// User update data. Only present attributes are changed.
#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct UserUpdate {
    /// The ID of the default project for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project_id: Option<String>,
    /// The ID of the domain of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// User email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the user is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The new password for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// User update request body.
#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct UserUpdateRequest {
    /// User object.
    pub user: UserUpdate,
}

/// Query parameters of the user listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserListParameters {
    /// Filter users by the default project ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project_id: Option<String>,
    /// Filter users by the domain ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Filter users by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
