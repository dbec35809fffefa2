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
//! # Token provider.
//!
//! Inspection of the tokens the requests are executed with: whether the token
//! has been issued for a trust (delegation of the trustor roles to the
//! trustee) and whether it is about to expire.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use secrecy::SecretString;
use tracing::{debug, trace};

pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::Config;
use crate::provider::Provider;
pub use error::TokenProviderError;

pub use crate::token::types::*;
#[cfg(test)]
pub use mock::MockTokenProvider;

#[derive(Clone, Debug)]
pub struct TokenProvider {
    config: Config,
}

impl TokenProvider {
    pub fn new(config: &Config) -> Result<Self, TokenProviderError> {
        Ok(Self {
            config: config.clone(),
        })
    }
}

#[async_trait]
impl TokenApi for TokenProvider {
    /// Check whether the token has been issued for a trust.
    #[tracing::instrument(level = "info", skip(self, provider, token))]
    async fn is_token_trust_scoped(
        &self,
        provider: &Provider,
        token: &SecretString,
    ) -> Result<bool, TokenProviderError> {
        let admin_client = provider
            .get_client_factory()
            .admin_client(
                None,
                self.config.keystone_authtoken.admin_tenant_name.as_deref(),
            )
            .await?;
        let token_data = admin_client.tokens().validate(token).await?;
        trace!("validated token: {:?}", token_data);
        Ok(token_data.is_trust_scoped())
    }
}

/// Check whether the token expiring at `expires_at` expires within the
/// `stale_duration` from now.
///
/// # Arguments
/// * `expires_at` - ISO 8601 expiration timestamp. Timestamps without the
///   offset are UTC.
/// * `stale_duration` - the staleness window (`expiration_token_duration`).
///
/// # Returns
/// * `Ok(false)` when the expiration is not known.
/// * `TokenProviderError::InvalidState` when the window is not configured.
/// * `TokenProviderError::InvalidTimestamp` when the timestamp can not be
///   parsed.
pub fn will_expire_soon(
    expires_at: Option<&str>,
    stale_duration: Option<TimeDelta>,
) -> Result<bool, TokenProviderError> {
    will_expire_soon_at(expires_at, stale_duration, Utc::now())
}

fn will_expire_soon_at(
    expires_at: Option<&str>,
    stale_duration: Option<TimeDelta>,
    now: DateTime<Utc>,
) -> Result<bool, TokenProviderError> {
    let Some(expires_at) = expires_at.filter(|val| !val.is_empty()) else {
        return Ok(false);
    };
    let stale_duration = stale_duration.ok_or_else(|| {
        TokenProviderError::InvalidState("expiration_token_duration must be specified".into())
    })?;

    let expires = parse_timestamp(expires_at)?;
    let soon = now
        .checked_add_signed(stale_duration)
        .ok_or(TokenProviderError::ExpiryCalculation)?;
    debug!("token expires at {}, stale after {}", expires, soon);
    Ok(expires <= soon)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TokenProviderError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .map_err(|_| TokenProviderError::InvalidTimestamp(value.to_string()))
}
