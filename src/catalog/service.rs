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

use tracing::error;
use validator::Validate;

use crate::catalog::types::*;
use crate::error::KeystoneOpsError;
use crate::keystone::{Keystone, KeystoneClient, Listing, deleted_message, into_listing};
use crate::resolver::{EntityKind, EntityRef, NameIndex};

impl<C: KeystoneClient> Keystone<C> {
    /// Resolve the service ID.
    pub async fn resolve_service_id(
        &self,
        service: &EntityRef,
    ) -> Result<String, KeystoneOpsError> {
        if let Some(id) = &service.id {
            return Ok(id.clone());
        }
        let name = service
            .name
            .as_deref()
            .ok_or(KeystoneOpsError::Unresolved(EntityKind::Service))?;
        let services = self
            .client
            .list_services(&ServiceListParameters {
                name: Some(name.into()),
                r#type: None,
            })
            .await?;
        NameIndex::new(&services).resolve(EntityKind::Service, name)
    }

    /// List services keyed by their name.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn service_list(&self) -> Result<Listing<Service>, KeystoneOpsError> {
        let services = self
            .client
            .list_services(&ServiceListParameters::default())
            .await?;
        Ok(into_listing(services, |service| service.name.clone()))
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn service_get(&self, service: &EntityRef) -> Result<Service, KeystoneOpsError> {
        let service_id = self.resolve_service_id(service).await?;
        match self.client.get_service(&service_id).await? {
            Some(service) => Ok(service),
            None => {
                let err = KeystoneOpsError::not_found(EntityKind::Service, service_id);
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Register the service in the catalog.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn service_create(&self, service: ServiceCreate) -> Result<Service, KeystoneOpsError> {
        service.validate()?;
        let created = self.client.create_service(service).await?;
        self.service_get(&EntityRef::id(created.id)).await
    }

    #[tracing::instrument(level = "info", skip(self))]
    pub async fn service_delete(&self, service: &EntityRef) -> Result<String, KeystoneOpsError> {
        let service_id = self.resolve_service_id(service).await?;
        self.client.delete_service(&service_id).await?;
        Ok(deleted_message(
            "Keystone service ID",
            &format!("\"{service_id}\""),
            service.name.as_deref(),
        ))
    }
}
