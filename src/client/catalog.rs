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

use async_trait::async_trait;

use openstack_keystone_api_types::v3::endpoint as api_endpoint;
use openstack_keystone_api_types::v3::service as api_service;

use super::HttpClient;
use super::error::ClientError;
use crate::catalog::types::*;

impl From<api_service::Service> for Service {
    fn from(value: api_service::Service) -> Self {
        Self {
            id: value.id,
            name: value.name.unwrap_or_default(),
            r#type: value.r#type,
            description: value.description,
        }
    }
}

impl From<api_endpoint::Endpoint> for Endpoint {
    fn from(value: api_endpoint::Endpoint) -> Self {
        Self {
            id: value.id,
            region: value.region_id.or(value.region),
            interface: value.interface,
            url: value.url,
            service_id: value.service_id,
        }
    }
}

#[async_trait]
impl CatalogApi for HttpClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_services(
        &self,
        params: &ServiceListParameters,
    ) -> Result<Vec<Service>, ClientError> {
        let query = api_service::ServiceListParameters {
            name: params.name.clone(),
            r#type: params.r#type.clone(),
        };
        let list: api_service::ServiceList = self.get("v3/services", &query).await?;
        Ok(list.services.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_service<'a>(&self, service_id: &'a str) -> Result<Option<Service>, ClientError> {
        Ok(self
            .get_optional::<api_service::ServiceResponse>(&format!("v3/services/{service_id}"))
            .await?
            .map(|rsp| rsp.service.into()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_service(&self, service: ServiceCreate) -> Result<Service, ClientError> {
        let rsp: api_service::ServiceResponse = self
            .post(
                "v3/services",
                &api_service::ServiceCreateRequest {
                    service: api_service::ServiceCreate {
                        description: service.description,
                        name: service.name,
                        r#type: service.r#type,
                    },
                },
            )
            .await?;
        Ok(rsp.service.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_service<'a>(&self, service_id: &'a str) -> Result<(), ClientError> {
        self.delete(&format!("v3/services/{service_id}")).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_endpoints(
        &self,
        params: &EndpointListParameters,
    ) -> Result<Vec<Endpoint>, ClientError> {
        let query = api_endpoint::EndpointListParameters {
            interface: params.interface.map(|interface| interface.to_string()),
            service_id: params.service_id.clone(),
        };
        let list: api_endpoint::EndpointList = self.get("v3/endpoints", &query).await?;
        Ok(list.endpoints.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_endpoint(&self, endpoint: EndpointCreate) -> Result<Endpoint, ClientError> {
        let rsp: api_endpoint::EndpointResponse = self
            .post(
                "v3/endpoints",
                &api_endpoint::EndpointCreateRequest {
                    endpoint: api_endpoint::EndpointCreate {
                        interface: endpoint.interface.to_string(),
                        region_id: endpoint.region,
                        service_id: endpoint.service_id,
                        url: endpoint.url,
                    },
                },
            )
            .await?;
        Ok(rsp.endpoint.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete_endpoint<'a>(&self, endpoint_id: &'a str) -> Result<(), ClientError> {
        self.delete(&format!("v3/endpoints/{endpoint_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::client::tests::token_client;

    #[tokio::test]
    async fn test_services() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/services").json_body(json!({
                    "service": {"name": "nova", "type": "compute"}
                }));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"service": {
                        "id": "s1",
                        "name": "nova",
                        "type": "compute",
                        "enabled": true
                    }}));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method("GET").path("/v3/services");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"services": [
                        {"id": "s1", "name": "nova", "type": "compute"},
                        {"id": "s2", "type": "image"}
                    ]}));
            })
            .await;
        let client = token_client(&server).await;

        let created = client
            .create_service(
                ServiceCreateBuilder::default()
                    .name("nova")
                    .r#type("compute")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!("s1", created.id);
        let services = client
            .list_services(&ServiceListParameters::default())
            .await
            .unwrap();
        assert_eq!("", services[1].name);
        create.assert_async().await;
        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_endpoints() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method("POST").path("/v3/endpoints").json_body(json!({
                    "endpoint": {
                        "interface": "internal",
                        "region_id": "RegionOne",
                        "service_id": "s1",
                        "url": "http://internal:8774"
                    }
                }));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"endpoint": {
                        "id": "e1",
                        "interface": "internal",
                        "region": "RegionOne",
                        "region_id": "RegionOne",
                        "service_id": "s1",
                        "url": "http://internal:8774",
                        "enabled": true
                    }}));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v3/endpoints")
                    .query_param("service_id", "s1");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"endpoints": [{
                        "id": "e1",
                        "interface": "internal",
                        "region": "RegionOne",
                        "service_id": "s1",
                        "url": "http://internal:8774"
                    }]}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method("DELETE").path("/v3/endpoints/e1");
                then.status(204);
            })
            .await;
        let client = token_client(&server).await;

        let created = client
            .create_endpoint(EndpointCreate {
                service_id: "s1".into(),
                url: "http://internal:8774".into(),
                interface: Interface::Internal,
                region: Some("RegionOne".into()),
            })
            .await
            .unwrap();
        assert_eq!(Some("RegionOne".to_string()), created.region);
        let endpoints = client
            .list_endpoints(&EndpointListParameters {
                service_id: Some("s1".into()),
                interface: None,
            })
            .await
            .unwrap();
        assert_eq!(vec![created], endpoints);
        client.delete_endpoint("e1").await.unwrap();
        create.assert_async().await;
        list.assert_async().await;
        delete.assert_async().await;
    }
}
