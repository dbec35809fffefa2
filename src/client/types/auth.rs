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
//! Authentication request (`POST /v3/auth/tokens`).

use derive_builder::Builder;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::error::BuilderError;

/// Authentication request.
#[derive(Clone, Debug, Serialize)]
pub struct AuthRequest {
    /// Authentication request.
    pub auth: AuthRequestInner,
}

/// Authentication request.
#[derive(Clone, Debug, Serialize)]
pub struct AuthRequestInner {
    /// An identity object.
    pub identity: Identity,

    /// The authorization scope. Unscoped token is requested when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

/// An identity object.
#[derive(Builder, Clone, Debug, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Identity {
    /// The authentication method.
    pub methods: Vec<String>,

    /// The password object, contains the authentication information.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordAuth>,
}

/// The password object, contains the authentication information.
#[derive(Builder, Clone, Debug, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct PasswordAuth {
    /// A user object.
    pub user: UserPassword,
}

/// User password information.
#[derive(Builder, Clone, Debug, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserPassword {
    /// User name.
    pub name: String,

    /// User password.
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,

    /// User domain.
    pub domain: Domain,
}

/// Domain information.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Domain {
    /// Domain ID.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Domain name.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The authorization scope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Scope {
    /// Project scope.
    #[serde(rename = "project")]
    Project(ScopeProject),

    /// Trust scope.
    #[serde(rename = "OS-TRUST:trust")]
    Trust(ScopeTrust),
}

/// Project scope information.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ScopeProject {
    /// Project ID.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Project name.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Project domain.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
}

/// Trust scope information.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScopeTrust {
    /// Trust ID.
    pub id: String,
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
