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
use validator::Validate;

use crate::error::BuilderError;
use crate::resolver::Named;

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Project {
    /// The project ID.
    pub id: String,

    /// The project name.
    pub name: String,

    /// The description of the project.
    #[builder(default)]
    pub description: Option<String>,

    /// If set to true, project is enabled. If set to false, project is
    /// disabled.
    #[builder(default)]
    pub enabled: bool,

    /// The project domain_id.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
}

impl Named for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectListParameters {
    /// Filter projects by the domain.
    #[builder(default)]
    pub domain_id: Option<String>,

    /// Filter projects by the name.
    #[builder(default)]
    pub name: Option<String>,
}

/// New project data.
#[derive(Builder, Clone, Debug, PartialEq, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectCreate {
    /// The name of the project, which must be unique within the owning domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The description of the project.
    #[builder(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// The ID of the domain for the project.
    #[builder(default)]
    #[validate(length(min = 1, max = 64))]
    pub domain_id: Option<String>,

    /// If set to true, project is enabled. If set to false, project is
    /// disabled.
    #[builder(default = "true")]
    pub enabled: bool,
}

/// Project update data. Attributes that are not set are left unchanged.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectUpdate {
    /// New project name.
    #[builder(default)]
    pub name: Option<String>,

    /// New description.
    #[builder(default)]
    pub description: Option<String>,

    /// The domain of the project.
    #[builder(default)]
    pub domain_id: Option<String>,

    /// Enable or disable the project.
    #[builder(default)]
    pub enabled: Option<bool>,
}
