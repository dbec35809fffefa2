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
//! # Identity client errors

use reqwest::StatusCode;
use thiserror::Error;

use crate::error::BuilderError;

/// Identity client error.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Identity service rejected the credentials.
    #[error("authentication failed with {0}")]
    AuthenticationFailed(StatusCode),

    /// Required configuration option is not set.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP client error.
    #[error(transparent)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    /// Header value cannot be used.
    #[error(transparent)]
    InvalidHeader {
        /// The source of the error.
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Identity URL cannot be used as a base for the API calls.
    #[error("{0} cannot be used as identity endpoint")]
    InvalidAuthUrl(String),

    /// Request context does not provide the required information.
    #[error("request context is missing the {0}")]
    MissingContext(String),

    /// Authentication response does not carry the token.
    #[error("X-Subject-Token is missing in the identity response")]
    MissingSubjectToken,

    /// Identity service responded with the error.
    #[error("identity request failed with {0}")]
    RequestFailed(StatusCode),

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// Header value contains non visible ASCII characters.
    #[error(transparent)]
    ToStr {
        /// The source of the error.
        #[from]
        source: reqwest::header::ToStrError,
    },
}
