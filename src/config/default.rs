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
use chrono::TimeDelta;
use serde::Deserialize;

use super::common::{default_endpoint_type, optional_timedelta_from_seconds};

/// Default configuration section.
#[derive(Debug, Deserialize, Clone)]
pub struct DefaultSection {
    /// If set to true, the logging level will be set to DEBUG instead of the
    /// default INFO level.
    #[serde(default)]
    pub debug: bool,

    /// Type of endpoint in the identity service catalog to use for the
    /// OpenStack actions. The value is matched as a substring of the endpoint
    /// interface (`public`, `internal`, `admin`).
    #[serde(default = "default_endpoint_type")]
    pub os_actions_endpoint_type: String,

    /// Window of time (in seconds) before the token expiration in which the
    /// token is already considered as expiring. Required for the token
    /// expiration checks.
    #[serde(default, deserialize_with = "optional_timedelta_from_seconds")]
    pub expiration_token_duration: Option<TimeDelta>,
}

impl Default for DefaultSection {
    fn default() -> Self {
        Self {
            debug: false,
            os_actions_endpoint_type: default_endpoint_type(),
            expiration_token_duration: None,
        }
    }
}
