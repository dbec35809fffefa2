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
//! # Configuration
//!
//! Parsing of the service configuration file. Only the options used for
//! talking to the identity service are read, everything else in the file is
//! ignored.
use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use serde::Deserialize;
use std::path::PathBuf;

mod common;
mod default;
mod keystone_authtoken;

pub use default::DefaultSection;
pub use keystone_authtoken::KeystoneAuthtokenSection;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Global configuration options.
    #[serde(rename = "DEFAULT", alias = "default", default)]
    pub default: DefaultSection,

    /// Identity service (Keystone) connection and service credentials.
    #[serde(default)]
    pub keystone_authtoken: KeystoneAuthtokenSection,
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = Report;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let mut builder = builder;
        builder = builder
            .set_default("keystone_authtoken.user_domain_name", "Default")?
            .set_default("keystone_authtoken.project_domain_name", "Default")?;

        builder
            .build()
            .wrap_err("Failed to read configuration file")?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")
    }
}
