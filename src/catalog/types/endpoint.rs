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

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Endpoint {
    /// The ID of the endpoint.
    pub id: String,
    /// The region that contains the service endpoint.
    #[builder(default)]
    pub region: Option<String>,
    /// The interface type, which describes the visibility of the endpoint.
    pub interface: String,
    /// The endpoint URL.
    pub url: String,
    /// The UUID of the service to which the endpoint belongs.
    pub service_id: String,
}

/// Endpoint interface.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// Visible by end users on a publicly available network interface.
    Public,
    /// Visible by end users on an unmetered internal network interface.
    Internal,
    /// Visible by administrative users on a secure network interface.
    Admin,
}

impl Interface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct EndpointListParameters {
    /// Filters the response by a service ID.
    #[builder(default)]
    pub service_id: Option<String>,
    /// Filters the response by an interface.
    #[builder(default)]
    pub interface: Option<Interface>,
}

/// New endpoint data.
#[derive(Builder, Clone, Debug, PartialEq, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct EndpointCreate {
    /// The UUID of the service to which the endpoint belongs.
    #[validate(length(min = 1, max = 64))]
    pub service_id: String,
    /// The endpoint URL.
    #[validate(length(min = 1))]
    pub url: String,
    pub interface: Interface,
    /// The region of the endpoint.
    #[builder(default)]
    pub region: Option<String>,
}

/// URLs of the endpoints to create for the service, one per interface.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct EndpointUrls {
    #[builder(default)]
    pub public: Option<String>,
    #[builder(default)]
    pub internal: Option<String>,
    #[builder(default)]
    pub admin: Option<String>,
}

impl EndpointUrls {
    /// Supplied URLs with their interfaces.
    pub fn iter(&self) -> impl Iterator<Item = (Interface, &str)> {
        [
            (Interface::Public, &self.public),
            (Interface::Internal, &self.internal),
            (Interface::Admin, &self.admin),
        ]
        .into_iter()
        .filter_map(|(interface, url)| url.as_deref().map(|url| (interface, url)))
    }
}
