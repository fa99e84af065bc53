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

pub mod endpoint;
pub mod service;

use async_trait::async_trait;

pub use crate::catalog::types::endpoint::*;
pub use crate::catalog::types::service::*;
use crate::client::error::ClientError;

/// Services and their endpoints.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List services.
    async fn list_services(
        &self,
        params: &ServiceListParameters,
    ) -> Result<Vec<Service>, ClientError>;

    /// Get single service by ID.
    async fn get_service<'a>(&self, service_id: &'a str) -> Result<Option<Service>, ClientError>;

    /// Create service.
    async fn create_service(&self, service: ServiceCreate) -> Result<Service, ClientError>;

    /// Delete service.
    async fn delete_service<'a>(&self, service_id: &'a str) -> Result<(), ClientError>;

    /// List endpoints.
    async fn list_endpoints(
        &self,
        params: &EndpointListParameters,
    ) -> Result<Vec<Endpoint>, ClientError>;

    /// Create endpoint.
    async fn create_endpoint(&self, endpoint: EndpointCreate) -> Result<Endpoint, ClientError>;

    /// Delete endpoint.
    async fn delete_endpoint<'a>(&self, endpoint_id: &'a str) -> Result<(), ClientError>;
}
