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

use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::SecretString;
use url::Url;

use super::KeystoneClient;
use super::types::TokenData;
use crate::catalog::ServiceCatalog;

/// Authenticated session of the service account.
#[derive(Clone, Debug)]
pub struct AdminSession {
    http_client: Client,
    auth_url: Url,
    token: SecretString,
    token_data: TokenData,
}

impl AdminSession {
    pub(super) fn new(
        http_client: Client,
        auth_url: Url,
        token: SecretString,
        token_data: TokenData,
    ) -> Self {
        Self {
            http_client,
            auth_url,
            token,
            token_data,
        }
    }

    pub fn auth_token(&self) -> &SecretString {
        &self.token
    }

    pub fn auth_url(&self) -> &Url {
        &self.auth_url
    }

    pub fn token_data(&self) -> &TokenData {
        &self.token_data
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.token_data.expires_at
    }

    /// Catalog returned with the session token.
    pub fn service_catalog(&self) -> ServiceCatalog {
        ServiceCatalog::from(self.token_data.clone())
    }

    /// Client bound to the session token.
    pub fn client(&self) -> KeystoneClient {
        KeystoneClient::new(
            self.http_client.clone(),
            self.auth_url.clone(),
            self.token.clone(),
        )
        .with_user_id(self.token_data.user.as_ref().map(|user| user.id.clone()))
        .with_project_id(
            self.token_data
                .project
                .as_ref()
                .map(|project| project.id.clone()),
        )
    }
}
