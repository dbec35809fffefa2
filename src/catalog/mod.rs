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
//! # Catalog provider
//!
//! Catalog provider resolves where the OpenStack services can be reached on
//! behalf of the requesting user.
//!
//! ## Service catalog
//!
//! The list of services together with their endpoints the identity service
//! returns with a token. The catalog of the request is taken from:
//!
//! - the identity service using the trust client when the request runs under
//!   a trust and the token really is trust scoped,
//! - the catalog forwarded with the request (`X-Target-Service-Catalog`),
//! - the identity service using the token of the requesting user.
//!
//! ## Endpoint
//!
//! A network-accessible address, usually a URL, through which the service is
//! reachable. Every service publishes endpoints for the `public`, `internal`
//! and `admin` interfaces. The interface preferred by the deployment is set
//! with the `os_actions_endpoint_type` option.
use async_trait::async_trait;
use tracing::debug;

pub mod error;
#[cfg(test)]
mod mock;
pub(crate) mod types;

use crate::catalog::error::CatalogProviderError;
use crate::config::Config;
use crate::context::RequestContext;
use crate::provider::Provider;
use crate::token::TokenApi;

#[cfg(test)]
pub use mock::MockCatalogProvider;

pub use types::*;

/// Name of the identity service in the catalog.
const KEYSTONE_SERVICE_NAME: &str = "keystone";

#[derive(Clone, Debug)]
pub struct CatalogProvider {
    preferred_interface: String,
}

impl CatalogProvider {
    pub fn new(config: &Config) -> Result<Self, CatalogProviderError> {
        Ok(Self {
            preferred_interface: config.default.os_actions_endpoint_type.clone(),
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogProvider {
    /// Obtain the service catalog for the request.
    #[tracing::instrument(level = "info", skip(self, provider, ctx))]
    async fn obtain_service_catalog(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<ServiceCatalog, CatalogProviderError> {
        if ctx.is_trust_scoped {
            let token = ctx.auth_token.as_ref().ok_or_else(|| {
                CatalogProviderError::InvalidState(
                    "trust scoped request context carries no token".into(),
                )
            })?;
            if provider
                .get_token_provider()
                .is_token_trust_scoped(provider, token)
                .await?
            {
                let trust_id = ctx.trust_id.as_deref().ok_or_else(|| {
                    CatalogProviderError::InvalidState(
                        "trust scoped request context carries no trust_id".into(),
                    )
                })?;
                debug!("fetching the catalog with the trust client");
                let trust_client = provider
                    .get_client_factory()
                    .client_for_trusts(trust_id)
                    .await?;
                let token_data = trust_client.tokens().get_token_data(token, true).await?;
                return Ok(token_data.into());
            }
        }

        // an empty forwarded catalog counts as absent
        if let Some(target_catalog) = ctx
            .target_service_catalog
            .as_ref()
            .map(|token_data| ServiceCatalog::from(token_data.clone()))
            .filter(|catalog| !catalog.is_empty())
        {
            debug!("using the catalog of the request");
            return Ok(target_catalog);
        }

        let client = provider.get_client_factory().client(ctx)?;
        let token_data = client
            .tokens()
            .get_token_data(client.auth_token(), true)
            .await?;
        Ok(token_data.into())
    }

    /// Resolve the endpoint of the service for the request.
    #[tracing::instrument(level = "info", skip(self, provider, ctx))]
    async fn get_endpoint_for_project(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
        params: &EndpointLookupParameters,
    ) -> Result<Endpoint, CatalogProviderError> {
        if params.service_name.is_none() && params.service_type.is_none() {
            return Err(CatalogProviderError::InvalidArgument(
                "either service_name or service_type must be set".into(),
            ));
        }

        let catalog = self.obtain_service_catalog(provider, ctx).await?;
        catalog
            .select_endpoint(
                params.service_name.as_deref(),
                params.service_type.as_deref(),
                &self.preferred_interface,
            )
            .ok_or_else(|| CatalogProviderError::EndpointNotFound {
                service_name: params.service_name.clone(),
                service_type: params.service_type.clone(),
            })
    }

    /// Resolve the endpoint of the identity service.
    #[tracing::instrument(level = "info", skip(self, provider, ctx))]
    async fn get_keystone_endpoint_v2(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<Endpoint, CatalogProviderError> {
        self.get_endpoint_for_project(
            provider,
            ctx,
            &EndpointLookupParameters {
                service_name: Some(KEYSTONE_SERVICE_NAME.into()),
                service_type: None,
            },
        )
        .await
    }

    /// Resolve the URL of the identity service.
    async fn get_keystone_url_v2(
        &self,
        provider: &Provider,
        ctx: &RequestContext,
    ) -> Result<String, CatalogProviderError> {
        Ok(self.get_keystone_endpoint_v2(provider, ctx).await?.url)
    }
}
