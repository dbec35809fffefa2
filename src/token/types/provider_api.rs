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
use secrecy::SecretString;

use crate::provider::Provider;
use crate::token::TokenProviderError;

#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Check whether the token has been issued for a trust.
    ///
    /// The token is validated with the identity service by the service
    /// account on every call.
    async fn is_token_trust_scoped(
        &self,
        provider: &Provider,
        token: &SecretString,
    ) -> Result<bool, TokenProviderError>;
}
