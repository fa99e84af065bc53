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
//! # Endpoint API types

use serde::{Deserialize, Serialize};

/// Endpoint object of the catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Endpoint {
    /// Whether the endpoint appears in the catalog.
    #[serde(default = "crate::default_true")]
    pub enabled: bool,
    /// The ID of the endpoint.
    pub id: String,
    /// The interface type, which describes the visibility of the endpoint
    /// (`public`, `internal` or `admin`).
    pub interface: String,
    /// The legacy region name of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// The ID of the region that contains the service endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    /// The UUID of the service to which the endpoint belongs.
    pub service_id: String,
    /// The endpoint URL.
    pub url: String,
}

/// Endpoint response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EndpointResponse {
    /// Endpoint object.
    pub endpoint: Endpoint,
}

/// List of endpoints.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EndpointList {
    /// Collection of endpoint objects.
    pub endpoints: Vec<Endpoint>,
}

/// Endpoint create data.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EndpointCreate {
    /// The interface type of the endpoint.
    pub interface: String,
    /// The ID of the region of the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    /// The UUID of the service to which the endpoint belongs.
    pub service_id: String,
    /// The endpoint URL.
    pub url: String,
}

/// Endpoint create request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EndpointCreateRequest {
    /// Endpoint object.
    pub endpoint: EndpointCreate,
}

/// Query parameters of the endpoint listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EndpointListParameters {
    /// Filters the response by an interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    /// Filters the response by a service ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}
