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
//! # Error
//!
//! Errors that can occur while talking to the identity service.
use thiserror::Error;

use crate::catalog::error::*;
use crate::client::error::*;
use crate::token::error::*;
use crate::utils::FormatUrlError;

/// Keystone utilities error.
#[derive(Debug, Error)]
pub enum KeystoneUtilsError {
    #[error(transparent)]
    CatalogProvider {
        #[from]
        source: CatalogProviderError,
    },

    /// Identity client error.
    #[error(transparent)]
    Client {
        /// The source of the error.
        #[from]
        source: ClientError,
    },

    #[error(transparent)]
    FormatUrl {
        #[from]
        source: FormatUrlError,
    },

    #[error(transparent)]
    TokenProvider {
        #[from]
        source: TokenProviderError,
    },

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },
}

/// Builder error.
///
/// Wrapped error of the `derive_builder` builders so that they can be
/// composed into the provider errors.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Uninitialized field.
    #[error("{0}")]
    UninitializedField(String),

    /// Custom validation error.
    #[error("{0}")]
    Validation(String),
}

impl From<String> for BuilderError {
    fn from(s: String) -> Self {
        Self::Validation(s)
    }
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(ufe: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(ufe.to_string())
    }
}
