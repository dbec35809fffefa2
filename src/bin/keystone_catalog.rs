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
//! Catalog lookup executable.
//!
//! This is the entry point of the `keystone-catalog` binary.

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use secrecy::SecretString;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    prelude::*,
};
use url::Url;

use openstack_keystone_utils::catalog::{CatalogApi, EndpointLookupParametersBuilder};
use openstack_keystone_utils::config::Config;
use openstack_keystone_utils::context::RequestContext;
use openstack_keystone_utils::provider::Provider;
use openstack_keystone_utils::utils::format_url;

/// Resolve the service endpoint from the Keystone service catalog.
///
/// The catalog is obtained exactly the way a workflow action executed with the
/// given token would obtain it. Without the service name and type the identity
/// service endpoint is resolved.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the service config file.
    #[arg(short, long, default_value = "/etc/mistral/mistral.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    /// Token of the user.
    #[arg(long)]
    token: String,

    /// Identity endpoint that issued the token. Defaults to the configured
    /// `keystone_authtoken.auth_uri`.
    #[arg(long)]
    auth_uri: Option<Url>,

    /// ID of the user.
    #[arg(long)]
    user_id: Option<String>,

    /// ID of the project. Also used for the `$(tenant_id)` and `$(project_id)`
    /// placeholders of the URL.
    #[arg(long)]
    project_id: Option<String>,

    /// Trust the request is executed under.
    #[arg(long)]
    trust_id: Option<String>,

    /// Whether the token is trust scoped.
    #[arg(long)]
    trust_scoped: bool,

    /// Name of the service.
    #[arg(long)]
    service_name: Option<String>,

    /// Type of the service.
    #[arg(long)]
    service_type: Option<String>,

    /// Additional URL placeholder value. Can be repeated.
    #[arg(long = "value", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
    values: Vec<(String, String)>,

    /// Token expiration timestamp. A warning is emitted when the token is about
    /// to expire.
    #[arg(long)]
    expires_at: Option<String>,
}

fn parse_placeholder(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(name, val)| (name.to_string(), val.to_string()))
        .ok_or_else(|| format!("`{value}` is not in the NAME=VALUE form"))
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let cfg = Config::new(args.config.clone())?;

    // `debug = true` in the config file enables the debug output as well
    let verbosity = if cfg.default.debug {
        args.verbose.max(2)
    } else {
        args.verbose
    };
    let filter = Targets::new()
        .with_default(match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        })
        .with_target("hyper_util", LevelFilter::INFO)
        .with_target("rustls", LevelFilter::INFO);

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    // build the tracing registry
    tracing_subscriber::registry().with(log_layer).init();

    let provider = Provider::new(cfg).wrap_err("Failed to initialize the providers")?;

    if provider.will_expire_soon(args.expires_at.as_deref())? {
        warn!("The token expires within the configured expiration_token_duration");
    }

    let mut ctx = RequestContext::builder();
    ctx.auth_token(SecretString::from(args.token))
        .is_trust_scoped(args.trust_scoped);
    if let Some(val) = args.auth_uri {
        ctx.auth_uri(val);
    }
    if let Some(val) = &args.user_id {
        ctx.user_id(val);
    }
    if let Some(val) = &args.project_id {
        ctx.project_id(val);
    }
    if let Some(val) = &args.trust_id {
        ctx.trust_id(val);
    }
    let ctx = ctx.build()?;

    let catalog = provider.get_catalog_provider();
    let endpoint = if args.service_name.is_none() && args.service_type.is_none() {
        info!("Resolving the identity service endpoint");
        catalog.get_keystone_endpoint_v2(&provider, &ctx).await?
    } else {
        let mut params = EndpointLookupParametersBuilder::default();
        if let Some(val) = args.service_name {
            params.service_name(val);
        }
        if let Some(val) = args.service_type {
            params.service_type(val);
        }
        let params = params.build()?;
        info!("Resolving the endpoint of {:?}", params);
        catalog
            .get_endpoint_for_project(&provider, &ctx, &params)
            .await?
    };
    debug!("Resolved endpoint {:?}", endpoint);

    let mut values: HashMap<String, String> = HashMap::new();
    if let Some(project_id) = &args.project_id {
        values.insert("tenant_id".into(), project_id.clone());
        values.insert("project_id".into(), project_id.clone());
    }
    values.extend(args.values);

    let url = format_url(&endpoint.url, &values)
        .wrap_err_with(|| format!("Failed to expand the endpoint URL {}", endpoint.url))?;
    println!("{url}");
    Ok(())
}
