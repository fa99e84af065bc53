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

use tracing::{debug, error};
use validator::Validate;

use crate::catalog::types::*;
use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient, Listing, into_listing};
use crate::resolver::EntityRef;

impl<C: KeystoneClient> Keystone<C> {
    async fn service_endpoints(&self, service_id: &str) -> Result<Vec<Endpoint>, KeystoneOpsError> {
        Ok(self
            .client
            .list_endpoints(&EndpointListParameters {
                service_id: Some(service_id.into()),
                interface: None,
            })
            .await?
            .into_iter()
            .filter(|endpoint| endpoint.service_id == service_id)
            .collect())
    }

    /// List endpoints keyed by their ID.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn endpoint_list(&self) -> Result<Listing<Endpoint>, KeystoneOpsError> {
        let endpoints = self
            .client
            .list_endpoints(&EndpointListParameters::default())
            .await?;
        Ok(into_listing(endpoints, |endpoint| endpoint.id.clone()))
    }

    /// Get the first endpoint of the service identified by the name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn endpoint_get(&self, service: &str) -> Result<Endpoint, KeystoneOpsError> {
        let service_id = self.resolve_service_id(&EntityRef::name(service)).await?;
        match self.service_endpoints(&service_id).await?.into_iter().next() {
            Some(endpoint) => Ok(endpoint),
            None => {
                let err = KeystoneOpsError::EndpointNotFound(service.into());
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Create an endpoint of the service for every supplied URL.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn endpoint_create(
        &self,
        service: &str,
        urls: &EndpointUrls,
        region: Option<&str>,
    ) -> Result<Endpoint, KeystoneOpsError> {
        if urls.iter().next().is_none() {
            return Err(KeystoneOpsError::MissingArgument("Endpoint URL".into()));
        }
        let service_id = self.resolve_service_id(&EntityRef::name(service)).await?;
        let requests = urls
            .iter()
            .map(|(interface, url)| EndpointCreate {
                service_id: service_id.clone(),
                url: url.into(),
                interface,
                region: region.map(Into::into),
            })
            .collect::<Vec<_>>();
        for request in &requests {
            request.validate()?;
        }
        for request in requests {
            let interface = request.interface;
            let created = self.client.create_endpoint(request).await?;
            debug!("created {} endpoint {}", interface, created.id);
        }
        self.endpoint_get(service).await
    }

    /// Delete all endpoints of the service.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn endpoint_delete(&self, service: &str) -> Result<String, KeystoneOpsError> {
        let service_id = self.resolve_service_id(&EntityRef::name(service)).await?;
        for endpoint in self.service_endpoints(&service_id).await? {
            self.client.delete_endpoint(&endpoint.id).await?;
        }
        Ok(format!("Endpoints of service ID {service_id} deleted ({service})"))
    }
}
