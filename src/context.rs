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
//! # Request context
//!
//! Identity information of the inbound request. The context is created once
//! per request by the caller and passed explicitly into every operation that
//! needs to act on behalf of the requesting user.

use derive_builder::Builder;
use secrecy::SecretString;
use url::Url;

use crate::client::types::TokenData;
use crate::error::BuilderError;

/// Identity information of the request.
#[derive(Builder, Clone, Debug, Default)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct RequestContext {
    /// Token of the requesting user.
    #[builder(default)]
    pub auth_token: Option<SecretString>,

    /// ID of the requesting user.
    #[builder(default)]
    pub user_id: Option<String>,

    /// ID of the project the token is scoped to.
    #[builder(default)]
    pub project_id: Option<String>,

    /// Identity endpoint the token was issued by. When unset the configured
    /// `keystone_authtoken.auth_uri` is used.
    #[builder(default)]
    pub auth_uri: Option<Url>,

    /// ID of the trust the request is executed under.
    #[builder(default)]
    pub trust_id: Option<String>,

    /// Whether the request runs under a trust.
    #[builder(default)]
    pub is_trust_scoped: bool,

    /// Catalog passed along with the request (i.e. `X-Target-Service-Catalog`).
    #[builder(default)]
    pub target_service_catalog: Option<TokenData>,
}

impl RequestContext {
    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }
}
