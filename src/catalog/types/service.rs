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
pub struct Service {
    /// The UUID of the service.
    pub id: String,
    /// The service name.
    pub name: String,
    /// The service type, which describes the API implemented by the service.
    pub r#type: String,
    /// The service description.
    #[builder(default)]
    pub description: Option<String>,
}

impl Named for Service {
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
pub struct ServiceListParameters {
    /// Filters the response by the service name.
    #[builder(default)]
    pub name: Option<String>,
    /// Filters the response by the service type.
    #[builder(default)]
    pub r#type: Option<String>,
}

/// New service data.
#[derive(Builder, Clone, Debug, PartialEq, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ServiceCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub r#type: String,
    #[builder(default)]
    pub description: Option<String>,
}
