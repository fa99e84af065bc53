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
//! # Project API types

use serde::{Deserialize, Serialize};

/// Project object as returned by the identity service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Project {
    /// The description of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The project domain ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// If set to true, project is enabled.
    #[serde(default = "crate::default_true")]
    pub enabled: bool,
    /// The project ID.
    pub id: String,
    /// The project name.
    pub name: String,
}

/// Project response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectResponse {
    /// Project object.
    pub project: Project,
}

/// List of projects.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectList {
    /// Collection of project objects.
    pub projects: Vec<Project>,
}

/// Project creation data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectCreate {
    /// The description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ID of the domain for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// If set to true, project is enabled.
    pub enabled: bool,
    /// The name of the project, which must be unique within the owning domain.
    pub name: String,
}

/// Project create request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectCreateRequest {
    /// Project object.
    pub project: ProjectCreate,
}

/// Project update data. Only present attributes are changed.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectUpdate {
    /// The description of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ID of the domain for the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// If set to true, project is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The name of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Project update request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectUpdateRequest {
    /// Project object.
    pub project: ProjectUpdate,
}

/// Query parameters of the project listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectListParameters {
    /// Filter projects by the domain ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Filter projects by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
