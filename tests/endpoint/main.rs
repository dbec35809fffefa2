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
//! End to end endpoint resolution against the mocked identity service.

use chrono::{TimeDelta, Utc};
use eyre::Result;
use httpmock::MockServer;
use secrecy::SecretString;
use serde_json::json;
use std::collections::HashMap;
use tracing_test::traced_test;

mod common;

use common::*;

use openstack_keystone_utils::catalog::{
    CatalogApi, EndpointLookupParameters, EndpointLookupParametersBuilder,
};
use openstack_keystone_utils::catalog::error::CatalogProviderError;
use openstack_keystone_utils::client::types::TokenData;
use openstack_keystone_utils::context::RequestContext;
use openstack_keystone_utils::provider::Provider;
use openstack_keystone_utils::utils::format_url;

fn user_context() -> Result<RequestContext> {
    Ok(RequestContext::builder()
        .auth_token(SecretString::from("user-token"))
        .user_id("uid")
        .project_id("abc")
        .build()?)
}

fn by_type(service_type: &str) -> EndpointLookupParameters {
    EndpointLookupParametersBuilder::default()
        .service_type(service_type)
        .build()
        .unwrap()
}

#[tokio::test]
#[traced_test]
async fn test_user_endpoint() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let catalog_mock = mock_token(
        &mock_srv,
        "user-token",
        "user-token",
        json!({"methods": ["password"], "catalog": catalog()}),
    )
    .await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;
    let ctx = user_context()?;

    let endpoint = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &ctx, &by_type("workflowv2"))
        .await?;
    assert_eq!("http://mistral:8989/v2", endpoint.url);
    assert_eq!(Some("RegionOne".into()), endpoint.region);

    let endpoint = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &ctx, &by_type("object-store"))
        .await?;
    let values = HashMap::from([("tenant_id".to_string(), "abc".to_string())]);
    assert_eq!(
        "http://swift:8080/v1/AUTH_abcs",
        format_url(&endpoint.url, &values)?
    );

    catalog_mock.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn test_internal_endpoint() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    mock_token(
        &mock_srv,
        "user-token",
        "user-token",
        json!({"methods": ["password"], "catalog": catalog()}),
    )
    .await;
    let provider = Provider::new(get_config(
        &mock_srv,
        "os_actions_endpoint_type = internal",
    )?)?;

    let endpoint = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &user_context()?, &by_type("workflowv2"))
        .await?;
    assert_eq!("http://mistral.internal:8989/v2", endpoint.url);
    Ok(())
}

#[tokio::test]
async fn test_keystone_url() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    mock_token(
        &mock_srv,
        "user-token",
        "user-token",
        json!({"methods": ["password"], "catalog": catalog()}),
    )
    .await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;

    assert_eq!(
        "http://keystone:5000/v3",
        provider
            .get_catalog_provider()
            .get_keystone_url_v2(&provider, &user_context()?)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_trust_endpoint() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let admin_auth = mock_admin_auth(
        &mock_srv,
        json!({"project": {"name": "service", "domain": {"name": "Default"}}}),
        "admin-token",
    )
    .await;
    let trust_auth = mock_admin_auth(
        &mock_srv,
        json!({"OS-TRUST:trust": {"id": "tid"}}),
        "trust-token",
    )
    .await;
    let validate = mock_token(
        &mock_srv,
        "admin-token",
        "user-token",
        json!({"methods": ["token"], "OS-TRUST:trust": {"id": "tid"}}),
    )
    .await;
    let trust_catalog = mock_token(
        &mock_srv,
        "trust-token",
        "user-token",
        json!({"methods": ["token"], "catalog": catalog()}),
    )
    .await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;

    let mut ctx = user_context()?;
    ctx.is_trust_scoped = true;
    ctx.trust_id = Some("tid".into());

    let endpoint = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &ctx, &by_type("workflowv2"))
        .await?;
    assert_eq!("http://mistral:8989/v2", endpoint.url);

    admin_auth.assert_async().await;
    validate.assert_async().await;
    trust_auth.assert_async().await;
    trust_catalog.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_trust_without_trust_id() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    mock_admin_auth(
        &mock_srv,
        json!({"project": {"name": "service", "domain": {"name": "Default"}}}),
        "admin-token",
    )
    .await;
    let trust_auth = mock_admin_auth(
        &mock_srv,
        json!({"OS-TRUST:trust": {"id": "tid"}}),
        "trust-token",
    )
    .await;
    mock_token(
        &mock_srv,
        "admin-token",
        "user-token",
        json!({"methods": ["token"], "OS-TRUST:trust": {"id": "tid"}}),
    )
    .await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;

    let mut ctx = user_context()?;
    ctx.is_trust_scoped = true;

    match provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &ctx, &by_type("workflowv2"))
        .await
    {
        Err(CatalogProviderError::InvalidState(_)) => {}
        other => panic!("should have raised an error, got {:?}", other),
    }
    assert_eq!(0, trust_auth.hits_async().await);
    Ok(())
}

#[tokio::test]
async fn test_forwarded_catalog() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;

    let mut ctx = user_context()?;
    ctx.target_service_catalog = Some(serde_json::from_value::<TokenData>(json!({
        "serviceCatalog": [{
            "type": "workflowv2",
            "name": "mistral",
            "endpoints": [{
                "publicURL": "http://mistral.v2:8989/v2",
                "internalURL": "http://mistral.v2.internal:8989/v2",
                "region": "RegionOne"
            }]
        }]
    }))?);

    let endpoint = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &ctx, &by_type("workflowv2"))
        .await?;
    assert_eq!("http://mistral.v2:8989/v2", endpoint.url);
    Ok(())
}

#[tokio::test]
async fn test_endpoint_not_found() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    mock_token(
        &mock_srv,
        "user-token",
        "user-token",
        json!({"methods": ["password"], "catalog": catalog()}),
    )
    .await;
    let provider = Provider::new(get_config(&mock_srv, "")?)?;

    if let Err(CatalogProviderError::EndpointNotFound { .. }) = provider
        .get_catalog_provider()
        .get_endpoint_for_project(&provider, &user_context()?, &by_type("image"))
        .await
    {
    } else {
        panic!("image service is not in the catalog");
    }

    if let Err(CatalogProviderError::InvalidArgument(_)) = provider
        .get_catalog_provider()
        .get_endpoint_for_project(
            &provider,
            &user_context()?,
            &EndpointLookupParameters::default(),
        )
        .await
    {
    } else {
        panic!("lookup without selectors should fail");
    }
    Ok(())
}

#[tokio::test]
async fn test_will_expire_soon() -> Result<()> {
    let mock_srv = MockServer::start_async().await;
    let provider = Provider::new(get_config(&mock_srv, "expiration_token_duration = 60")?)?;

    let expires_at = (Utc::now() + TimeDelta::seconds(30)).to_rfc3339();
    assert!(provider.will_expire_soon(Some(expires_at.as_str()))?);
    let expires_at = (Utc::now() + TimeDelta::seconds(3600)).to_rfc3339();
    assert!(!provider.will_expire_soon(Some(expires_at.as_str()))?);
    assert!(!provider.will_expire_soon(None)?);
    Ok(())
}
