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
//! # Identity client factory
//!
//! Builds authenticated [`KeystoneClient`] handles:
//!
//! - as the requesting user, reusing the token of the [`RequestContext`],
//! - as the service account configured in the `[keystone_authtoken]`
//!   section, optionally scoped to a project or to a trust.
//!
//! Service account handles are obtained with the password authentication
//! method (`POST /v3/auth/tokens`). Nothing is cached: every call
//! authenticates again.
use reqwest::{Client, StatusCode};
use secrecy::SecretString;
use tracing::{debug, trace};
use url::Url;

pub mod error;
mod keystone_client;
mod session;
pub mod types;

use crate::config::Config;
use crate::context::RequestContext;
use keystone_client::{SUBJECT_TOKEN_HEADER, api_url};
use types::*;

pub use error::ClientError;
pub use keystone_client::{KeystoneClient, TokenManager};
pub use session::AdminSession;

/// Factory of the identity client handles.
#[derive(Clone, Debug)]
pub struct ClientFactory {
    config: Config,
    http_client: Client,
}

impl ClientFactory {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Ok(Self {
            config: config.clone(),
            http_client: Client::builder().build()?,
        })
    }

    /// Client acting as the requesting user.
    ///
    /// No call to the identity service is done: the token of the context is
    /// used as is.
    #[tracing::instrument(level = "debug", skip(self, ctx))]
    pub fn client(&self, ctx: &RequestContext) -> Result<KeystoneClient, ClientError> {
        let auth_url = ctx
            .auth_uri
            .as_ref()
            .or(self.config.keystone_authtoken.auth_uri.as_ref())
            .ok_or_else(|| ClientError::MissingContext("auth_uri".into()))?;
        let token = ctx
            .auth_token
            .clone()
            .ok_or_else(|| ClientError::MissingContext("auth_token".into()))?;

        Ok(
            KeystoneClient::new(self.http_client.clone(), auth_url.clone(), token)
                .with_user_id(ctx.user_id.clone())
                .with_project_id(ctx.project_id.clone()),
        )
    }

    /// Client acting as the service account.
    ///
    /// With the `trust_id` the token is scoped to the trust, otherwise to the
    /// project with the `project_name` (in the configured project domain).
    /// Without both an unscoped token is requested.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn admin_client(
        &self,
        trust_id: Option<&str>,
        project_name: Option<&str>,
    ) -> Result<KeystoneClient, ClientError> {
        let scope = match (trust_id, project_name) {
            (Some(trust_id), _) => Some(Scope::Trust(ScopeTrust {
                id: trust_id.into(),
            })),
            (None, Some(project_name)) => Some(self.admin_project_scope(project_name)?),
            (None, None) => None,
        };

        let (token, token_data) = self.authenticate_service_user(scope).await?;
        Ok(
            KeystoneClient::new(self.http_client.clone(), self.admin_auth_url()?, token)
                .with_user_id(token_data.user.map(|user| user.id))
                .with_project_id(token_data.project.map(|project| project.id))
                .with_trust_id(trust_id.map(Into::into)),
        )
    }

    /// Service account client scoped to the project.
    pub async fn client_for_admin(
        &self,
        project_name: &str,
    ) -> Result<KeystoneClient, ClientError> {
        self.admin_client(None, Some(project_name)).await
    }

    /// Service account client scoped to the trust.
    pub async fn client_for_trusts(&self, trust_id: &str) -> Result<KeystoneClient, ClientError> {
        self.admin_client(Some(trust_id), None).await
    }

    /// Authenticated session of the service account scoped to the configured
    /// `admin_tenant_name`.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn get_admin_session(&self) -> Result<AdminSession, ClientError> {
        let scope = self
            .config
            .keystone_authtoken
            .admin_tenant_name
            .as_deref()
            .map(|name| self.admin_project_scope(name))
            .transpose()?;

        let (token, token_data) = self.authenticate_service_user(scope).await?;
        Ok(AdminSession::new(
            self.http_client.clone(),
            self.admin_auth_url()?,
            token,
            token_data,
        ))
    }

    fn admin_auth_url(&self) -> Result<Url, ClientError> {
        self.config
            .keystone_authtoken
            .auth_uri
            .clone()
            .ok_or_else(|| {
                ClientError::Configuration("keystone_authtoken.auth_uri is not set".into())
            })
    }

    fn admin_project_scope(&self, project_name: &str) -> Result<Scope, ClientError> {
        Ok(Scope::Project(
            ScopeProjectBuilder::default()
                .name(project_name)
                .domain(
                    DomainBuilder::default()
                        .name(self.config.keystone_authtoken.project_domain_name.clone())
                        .build()?,
                )
                .build()?,
        ))
    }

    /// Authenticate the service account with the password method.
    async fn authenticate_service_user(
        &self,
        scope: Option<Scope>,
    ) -> Result<(SecretString, TokenData), ClientError> {
        let section = &self.config.keystone_authtoken;
        let auth_url = self.admin_auth_url()?;
        let user_name = section.admin_user.as_deref().ok_or_else(|| {
            ClientError::Configuration("keystone_authtoken.admin_user is not set".into())
        })?;
        let password = section.admin_password.clone().ok_or_else(|| {
            ClientError::Configuration("keystone_authtoken.admin_password is not set".into())
        })?;

        let request = AuthRequest {
            auth: AuthRequestInner {
                identity: IdentityBuilder::default()
                    .methods(vec!["password".to_string()])
                    .password(
                        PasswordAuthBuilder::default()
                            .user(
                                UserPasswordBuilder::default()
                                    .name(user_name)
                                    .password(password)
                                    .domain(
                                        DomainBuilder::default()
                                            .name(section.user_domain_name.clone())
                                            .build()?,
                                    )
                                    .build()?,
                            )
                            .build()?,
                    )
                    .build()?,
                scope,
            },
        };

        let response = self
            .http_client
            .post(api_url(&auth_url, &["auth", "tokens"])?)
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let token = response
                    .headers()
                    .get(SUBJECT_TOKEN_HEADER)
                    .ok_or(ClientError::MissingSubjectToken)?
                    .to_str()?
                    .to_string();
                let token_data = response.json::<TokenResponse>().await?.token;
                trace!("service account token: {:?}", token_data);
                Ok((SecretString::from(token), token_data))
            }
            status => {
                debug!("Identity service returned {:?}", response);
                Err(ClientError::AuthenticationFailed(status))
            }
        }
    }
}
