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
use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

/// The assignment of the role to the user on the project.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct Assignment {
    /// The role ID.
    pub role_id: String,
    /// The user ID.
    pub user_id: String,
    /// The project ID.
    pub project_id: String,
}

/// Role granted to the user on the project, as returned by the listing.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct RoleAssignment {
    /// The role ID.
    pub id: String,
    /// The role name.
    pub name: String,
    /// The user ID.
    pub user_id: String,
    /// The project ID.
    pub project_id: String,
}
