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
//! # Service API types

use serde::{Deserialize, Serialize};

/// Service object of the catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Service {
    /// The service description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the service appears in the catalog.
    #[serde(default = "crate::default_true")]
    pub enabled: bool,
    /// The ID of the service.
    pub id: String,
    /// The service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The service type.
    pub r#type: String,
}

/// Service response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceResponse {
    /// Service object.
    pub service: Service,
}

/// List of services.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceList {
    /// Collection of service objects.
    pub services: Vec<Service>,
}

/// Service create data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceCreate {
    /// The service description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The service name.
    pub name: String,
    /// The service type.
    pub r#type: String,
}

/// Service create request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceCreateRequest {
    /// Service object.
    pub service: ServiceCreate,
}

/// Query parameters of the service listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceListParameters {
    /// Filters the response by a service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filters the response by a service type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}
