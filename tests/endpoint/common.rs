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
//! Common functionality of the endpoint resolution tests.

use eyre::Result;
use httpmock::Method::{GET, POST};
use httpmock::{Mock, MockServer};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

use openstack_keystone_utils::config::Config;

/// Write the configuration file pointing to the mocked identity service.
pub fn config_file(mock_srv: &MockServer, extra_default: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[DEFAULT]
{extra_default}

[keystone_authtoken]
auth_uri = {}
admin_user = mistral
admin_password = secret
admin_tenant_name = service
"#,
        mock_srv.url("/v3")
    )?;
    Ok(file)
}

pub fn get_config(mock_srv: &MockServer, extra_default: &str) -> Result<Config> {
    let file = config_file(mock_srv, extra_default)?;
    Config::new(file.path().to_path_buf())
}

/// Mock the service account authentication with the given scope.
pub async fn mock_admin_auth<'a>(
    mock_srv: &'a MockServer,
    scope: Value,
    subject_token: &str,
) -> Mock<'a> {
    let subject_token = subject_token.to_string();
    mock_srv
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v3/auth/tokens")
                .json_body(json!({"auth": {
                    "identity": {
                        "methods": ["password"],
                        "password": {"user": {
                            "name": "mistral",
                            "password": "secret",
                            "domain": {"name": "Default"}
                        }}
                    },
                    "scope": scope
                }}));
            then.status(201)
                .header("x-subject-token", subject_token)
                .header("content-type", "application/json")
                .json_body(json!({"token": {
                    "methods": ["password"],
                    "user": {"id": "admin-uid"}
                }}));
        })
        .await
}

/// Mock the token information call.
pub async fn mock_token<'a>(
    mock_srv: &'a MockServer,
    auth_token: &str,
    subject_token: &str,
    token: Value,
) -> Mock<'a> {
    let auth_token = auth_token.to_string();
    let subject_token = subject_token.to_string();
    mock_srv
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/auth/tokens")
                .header("x-auth-token", auth_token)
                .header("x-subject-token", subject_token);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "token": token }));
        })
        .await
}

pub fn catalog() -> Value {
    json!([
        {
            "type": "workflowv2",
            "name": "mistral",
            "id": "mistral-sid",
            "endpoints": [
                {"id": "m1", "interface": "admin", "region_id": "RegionOne",
                 "url": "http://mistral.admin:8989/v2"},
                {"id": "m2", "interface": "internal", "region_id": "RegionOne",
                 "url": "http://mistral.internal:8989/v2"},
                {"id": "m3", "interface": "public", "region_id": "RegionOne",
                 "url": "http://mistral:8989/v2"}
            ]
        },
        {
            "type": "object-store",
            "name": "swift",
            "id": "swift-sid",
            "endpoints": [
                {"id": "s1", "interface": "public", "region_id": "RegionOne",
                 "url": "http://swift:8080/v1/AUTH_$(tenant_id)s"}
            ]
        },
        {
            "type": "identity",
            "name": "keystone",
            "id": "keystone-sid",
            "endpoints": [
                {"id": "k1", "interface": "public", "region_id": "RegionOne",
                 "url": "http://keystone:5000/v3"}
            ]
        }
    ])
}
