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
//! # Catalog provider errors

use thiserror::Error;

use crate::client::ClientError;
use crate::token::error::TokenProviderError;

/// Catalog provider error.
#[derive(Error, Debug)]
pub enum CatalogProviderError {
    /// Identity client error.
    #[error(transparent)]
    Client {
        /// The source of the error.
        #[from]
        source: ClientError,
    },

    /// No endpoint of the service found in the catalog.
    #[error(
        "endpoint for service name {service_name:?} and type {service_type:?} not found in the catalog"
    )]
    EndpointNotFound {
        service_name: Option<String>,
        service_type: Option<String>,
    },

    /// Invalid arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Request context does not allow to obtain the catalog.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Token provider error.
    #[error(transparent)]
    TokenProvider {
        /// The source of the error.
        #[from]
        source: TokenProviderError,
    },
}
