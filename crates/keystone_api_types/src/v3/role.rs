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
//! # Role API types

use serde::{Deserialize, Serialize};

/// The role data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Role {
    /// Role ID.
    pub id: String,
    /// Role domain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Role name.
    pub name: String,
    /// Role description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleResponse {
    /// Role object.
    pub role: Role,
}

/// Roles.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleList {
    /// Collection of role objects.
    pub roles: Vec<Role>,
}

/// Role create data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleCreate {
    /// The role name.
    pub name: String,
}

/// Role create request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleCreateRequest {
    /// Role object.
    pub role: RoleCreate,
}

/// Query parameters of the role listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoleListParameters {
    /// Filter roles by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
