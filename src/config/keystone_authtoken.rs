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
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use super::common::default_domain_name;

/// Identity service connection.
#[derive(Debug, Deserialize, Clone)]
pub struct KeystoneAuthtokenSection {
    /// Identity API v3 endpoint (i.e. `http://keystone:5000/v3`).
    pub auth_uri: Option<Url>,

    /// Service account user name.
    pub admin_user: Option<String>,

    /// Service account password.
    pub admin_password: Option<SecretString>,

    /// Project the service account is scoped to.
    pub admin_tenant_name: Option<String>,

    /// Domain name of the service account user.
    #[serde(default = "default_domain_name")]
    pub user_domain_name: String,

    /// Domain name of the service account project.
    #[serde(default = "default_domain_name")]
    pub project_domain_name: String,
}

impl Default for KeystoneAuthtokenSection {
    fn default() -> Self {
        Self {
            auth_uri: None,
            admin_user: None,
            admin_password: None,
            admin_tenant_name: None,
            user_domain_name: default_domain_name(),
            project_domain_name: default_domain_name(),
        }
    }
}
