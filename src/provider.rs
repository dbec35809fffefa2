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
//! # Provider manager
//!
//! Provider manager provides access to the individual providers. This gives
//! an easy way of passing the overall manager down to the individual providers
//! that might need to call other providers while also allowing an easy
//! injection of mocked providers.
use derive_builder::Builder;
use mockall_double::double;

use crate::catalog::CatalogApi;
#[double]
use crate::catalog::CatalogProvider;
use crate::client::ClientFactory;
use crate::config::Config;
use crate::error::KeystoneUtilsError;
use crate::token::{TokenApi, TokenProviderError, will_expire_soon};
#[double]
use crate::token::TokenProvider;

/// Global provider manager.
#[derive(Builder, Clone)]
// It is necessary to use the owned pattern since otherwise builder invokes clone which immediately
// confuses mockall used in tests
#[builder(pattern = "owned")]
pub struct Provider {
    /// Configuration.
    pub config: Config,
    /// Catalog provider.
    catalog: CatalogProvider,
    /// Identity client factory.
    client_factory: ClientFactory,
    /// Token provider.
    token: TokenProvider,
}

impl Provider {
    pub fn new(cfg: Config) -> Result<Self, KeystoneUtilsError> {
        let catalog_provider = CatalogProvider::new(&cfg)?;
        let client_factory = ClientFactory::new(&cfg)?;
        let token_provider = TokenProvider::new(&cfg)?;

        Ok(Self {
            config: cfg,
            catalog: catalog_provider,
            client_factory,
            token: token_provider,
        })
    }

    /// Get the catalog provider.
    pub fn get_catalog_provider(&self) -> &impl CatalogApi {
        &self.catalog
    }

    /// Get the identity client factory.
    pub fn get_client_factory(&self) -> &ClientFactory {
        &self.client_factory
    }

    /// Get the token provider.
    pub fn get_token_provider(&self) -> &impl TokenApi {
        &self.token
    }

    /// Check whether the token expires within the configured
    /// `expiration_token_duration`.
    pub fn will_expire_soon(&self, expires_at: Option<&str>) -> Result<bool, TokenProviderError> {
        will_expire_soon(expires_at, self.config.default.expiration_token_duration)
    }
}

#[cfg(test)]
impl Provider {
    pub fn mocked_builder() -> ProviderBuilder {
        let config = Config::default();
        let catalog_mock = crate::catalog::MockCatalogProvider::default();
        let token_mock = crate::token::MockTokenProvider::default();

        ProviderBuilder::default()
            .config(config.clone())
            .catalog(catalog_mock)
            .client_factory(ClientFactory::new(&config).unwrap())
            .token(token_mock)
    }
}
