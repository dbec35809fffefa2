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
//! Token information returned by the identity service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::types::CatalogService;

/// Token response of the authentication and validation calls.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenResponse {
    /// Token information.
    pub token: TokenData,
}

/// Token information.
///
/// Both the v3 `catalog` and the legacy v2 `serviceCatalog` are accepted so
/// that a catalog forwarded by older services can be consumed as well.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenData {
    /// Authentication methods used to obtain the token.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Token audit IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audit_ids: Vec<String>,

    /// Token expiration datetime in UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Token issue datetime in UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,

    /// Token owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TokenUser>,

    /// Project the token is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<TokenProject>,

    /// Roles granted on the scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<TokenRole>>,

    /// v3 service catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<CatalogService>>,

    /// v2 service catalog.
    #[serde(
        default,
        rename = "serviceCatalog",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_catalog: Option<Vec<CatalogService>>,

    /// Trust the token has been issued for.
    #[serde(
        default,
        rename = "OS-TRUST:trust",
        skip_serializing_if = "Option::is_none"
    )]
    pub trust: Option<TokenTrust>,
}

impl TokenData {
    /// Whether the token carries a trust grant.
    pub fn is_trust_scoped(&self) -> bool {
        self.trust.is_some()
    }
}

/// User information of the token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<TokenDomain>,
}

/// Project information of the token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenProject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<TokenDomain>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenRole {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Trust information of the token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenTrust {
    /// Trust ID.
    pub id: String,

    /// Whether the trustee impersonates the trustor.
    #[serde(default)]
    pub impersonation: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trustee_user: Option<TokenTrustUser>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trustor_user: Option<TokenTrustUser>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TokenTrustUser {
    pub id: String,
}
