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
//! Token provider errors.

use thiserror::Error;

use crate::client::ClientError;

/// Token provider error.
#[derive(Error, Debug)]
pub enum TokenProviderError {
    /// Identity client error.
    #[error(transparent)]
    Client {
        /// The source of the error.
        #[from]
        source: ClientError,
    },

    /// Expiration window cannot be applied to the current time.
    #[error("token expiry calculation failed")]
    ExpiryCalculation,

    /// Token staleness cannot be evaluated.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Token expiration is not a valid ISO 8601 timestamp.
    #[error("invalid token expiration timestamp: {0}")]
    InvalidTimestamp(String),
}
