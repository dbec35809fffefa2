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

use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::client::types::TokenData;

/// Service of the catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogService {
    /// The service type.
    pub r#type: String,

    /// The service name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The service ID. Not present in the legacy catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Endpoints of the service.
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

/// Endpoint record of the catalog service.
///
/// Identity API v3 publishes one record per interface while the legacy v2
/// catalog has one record carrying the URLs of all interfaces.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEndpoint {
    /// v3 record.
    Interface(InterfaceEndpoint),
    /// v2 record.
    Legacy(LegacyEndpoint),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InterfaceEndpoint {
    /// The ID of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The interface type (`public`, `internal` or `admin`).
    pub interface: String,
    /// The endpoint URL.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LegacyEndpoint {
    #[serde(
        default,
        rename = "publicURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_url: Option<String>,
    #[serde(
        default,
        rename = "internalURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_url: Option<String>,
    #[serde(
        default,
        rename = "adminURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Service catalog in the order published by the identity service.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServiceCatalog(Vec<CatalogService>);

impl From<Vec<CatalogService>> for ServiceCatalog {
    fn from(value: Vec<CatalogService>) -> Self {
        Self(value)
    }
}

impl From<TokenData> for ServiceCatalog {
    fn from(value: TokenData) -> Self {
        Self(
            value
                .catalog
                .or(value.service_catalog)
                .unwrap_or_default(),
        )
    }
}

impl ServiceCatalog {
    pub fn services(&self) -> &[CatalogService] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Endpoint records of the services matching every given selector.
    ///
    /// Records are grouped by the service type. Groups follow the order of
    /// the first appearance of the type in the catalog, records within the
    /// group keep the catalog order.
    pub fn get_endpoints(
        &self,
        service_name: Option<&str>,
        service_type: Option<&str>,
    ) -> Vec<(&str, Vec<&CatalogEndpoint>)> {
        let mut groups: Vec<(&str, Vec<&CatalogEndpoint>)> = Vec::new();
        for service in self.0.iter().filter(|service| {
            service_name.is_none_or(|name| service.name.as_deref() == Some(name))
                && service_type.is_none_or(|r#type| service.r#type == r#type)
        }) {
            match groups
                .iter_mut()
                .find(|(r#type, _)| *r#type == service.r#type)
            {
                Some((_, endpoints)) => endpoints.extend(service.endpoints.iter()),
                None => groups.push((
                    service.r#type.as_str(),
                    service.endpoints.iter().collect(),
                )),
            }
        }
        groups
    }

    /// Select the endpoint of the service.
    ///
    /// The first v3 record whose interface contains `preferred_interface`
    /// wins. Only when there is none the first legacy record with the public
    /// URL is taken. Region is not considered: with multiple regions the
    /// first match is returned.
    pub fn select_endpoint(
        &self,
        service_name: Option<&str>,
        service_type: Option<&str>,
        preferred_interface: &str,
    ) -> Option<Endpoint> {
        let candidates: Vec<&CatalogEndpoint> = self
            .get_endpoints(service_name, service_type)
            .into_iter()
            .flat_map(|(_, endpoints)| endpoints)
            .collect();

        candidates
            .iter()
            .find_map(|record| match record {
                CatalogEndpoint::Interface(endpoint)
                    if endpoint.interface.contains(preferred_interface) =>
                {
                    Some(Endpoint {
                        url: endpoint.url.clone(),
                        region: endpoint.region.clone().or(endpoint.region_id.clone()),
                    })
                }
                _ => None,
            })
            .or_else(|| {
                candidates.iter().find_map(|record| match record {
                    CatalogEndpoint::Legacy(endpoint) => {
                        endpoint.public_url.as_ref().map(|url| Endpoint {
                            url: url.clone(),
                            region: endpoint.region.clone(),
                        })
                    }
                    _ => None,
                })
            })
    }
}
