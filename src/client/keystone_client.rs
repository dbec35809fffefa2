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
//! # Identity client handle

use reqwest::{Client, StatusCode, header::HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, trace};
use url::Url;

use crate::client::ClientError;
use crate::client::types::{TokenData, TokenResponse};

pub(super) const AUTH_TOKEN_HEADER: &str = "x-auth-token";
pub(super) const SUBJECT_TOKEN_HEADER: &str = "x-subject-token";

/// Authenticated handle to the identity service.
///
/// The handle carries the token used for the calls (`X-Auth-Token`). The
/// `management_url` is always equal to the `auth_url`: the identity service
/// is reached through the very endpoint the token has been obtained from and
/// never through the URL advertised in the catalog.
#[derive(Clone, Debug)]
pub struct KeystoneClient {
    http_client: Client,

    /// Identity endpoint the client authenticates against.
    pub auth_url: Url,

    /// Identity endpoint the API calls are sent to.
    pub management_url: Url,

    token: SecretString,

    /// ID of the user owning the token.
    pub user_id: Option<String>,

    /// ID of the project the token is scoped to.
    pub project_id: Option<String>,

    /// ID of the trust the token is scoped to.
    pub trust_id: Option<String>,
}

impl KeystoneClient {
    pub(super) fn new(http_client: Client, auth_url: Url, token: SecretString) -> Self {
        Self {
            http_client,
            management_url: auth_url.clone(),
            auth_url,
            token,
            user_id: None,
            project_id: None,
            trust_id: None,
        }
    }

    pub(super) fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub(super) fn with_project_id(mut self, project_id: Option<String>) -> Self {
        self.project_id = project_id;
        self
    }

    pub(super) fn with_trust_id(mut self, trust_id: Option<String>) -> Self {
        self.trust_id = trust_id;
        self
    }

    /// Token used by the client.
    pub fn auth_token(&self) -> &SecretString {
        &self.token
    }

    /// Token operations.
    pub fn tokens(&self) -> TokenManager<'_> {
        TokenManager { client: self }
    }
}

/// Token operations of the identity API.
pub struct TokenManager<'a> {
    client: &'a KeystoneClient,
}

impl TokenManager<'_> {
    /// Fetch the information of the `token`.
    ///
    /// # Arguments
    /// * `token` - the token to be inspected (`X-Subject-Token`).
    /// * `include_catalog` - whether the service catalog should be part of
    ///   the response.
    ///
    /// # Returns
    /// * Success with the [`TokenData`].
    /// * `ClientError::RequestFailed` when the identity service rejects the
    ///   request (i.e. the token is invalid or expired).
    #[tracing::instrument(level = "debug", skip(self, token))]
    pub async fn get_token_data(
        &self,
        token: &SecretString,
        include_catalog: bool,
    ) -> Result<TokenData, ClientError> {
        let mut url = api_url(&self.client.management_url, &["auth", "tokens"])?;
        if !include_catalog {
            url.query_pairs_mut().append_key_only("nocatalog");
        }

        let response = self
            .client
            .http_client
            .get(url)
            .header(AUTH_TOKEN_HEADER, sensitive_header(&self.client.token)?)
            .header(SUBJECT_TOKEN_HEADER, sensitive_header(token)?)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let data = response.json::<TokenResponse>().await?.token;
                trace!("token data: {:?}", data);
                Ok(data)
            }
            status => {
                debug!("Identity service returned {:?}", response);
                Err(ClientError::RequestFailed(status))
            }
        }
    }

    /// Validate the `token` without fetching the catalog.
    pub async fn validate(&self, token: &SecretString) -> Result<TokenData, ClientError> {
        self.get_token_data(token, false).await
    }
}

/// Build the URL of the identity API resource relative to the `base`.
pub(super) fn api_url(base: &Url, path: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidAuthUrl(base.to_string()))?
        .pop_if_empty()
        .extend(path);
    Ok(url)
}

pub(super) fn sensitive_header(value: &SecretString) -> Result<HeaderValue, ClientError> {
    let mut header = HeaderValue::from_str(value.expose_secret())?;
    header.set_sensitive(true);
    Ok(header)
}
