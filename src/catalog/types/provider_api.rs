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

use crate::catalog::CatalogProviderError;
use crate::context::RequestContext;
use crate::provider::Provider;

use super::{Endpoint, EndpointLookupParameters, ServiceCatalog};

#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Obtain the service catalog for the request.
    async fn obtain_service_catalog(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<ServiceCatalog, CatalogProviderError>;

    /// Resolve the endpoint of the service for the request.
    async fn get_endpoint_for_project(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
        params: &EndpointLookupParameters,
    ) -> Result<Endpoint, CatalogProviderError>;

    /// Resolve the endpoint of the identity service.
    async fn get_keystone_endpoint_v2(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<Endpoint, CatalogProviderError>;

    /// Resolve the URL of the identity service.
    async fn get_keystone_url_v2(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<String, CatalogProviderError>;
}
