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

//! # Keystone identity utilities
//!
//! Services executing workflows on behalf of OpenStack users need to talk to
//! the Keystone identity service all the time: to act as the calling user, to
//! act as the service account itself, to act on behalf of another user through
//! a trust, and to discover where the other OpenStack services live.
//!
//! This crate bundles that glue:
//!
//! - [`client::ClientFactory`] builds authenticated [`client::KeystoneClient`]
//!   handles either from the [`context::RequestContext`] of the inbound
//!   request or from the statically configured service credentials (optionally
//!   scoped to a trust).
//!
//! - [`catalog::CatalogApi`] obtains the service catalog for the request and
//!   resolves the endpoint of a service by name or type, honoring the
//!   configured endpoint interface preference (`public`, `internal`, `admin`)
//!   and both the v3 and the legacy v2 catalog shapes.
//!
//! - [`token::TokenApi`] and [`token::will_expire_soon`] inspect tokens for a
//!   trust grant and for upcoming expiration.
//!
//! - [`utils::format_url`] expands `$(name)` placeholders of catalog URL
//!   templates.
//!
//! Everything is wired together by the [`provider::Provider`], which is
//! constructed once from the [`config::Config`] and passed explicitly into the
//! operations together with the request context.

pub mod catalog;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod provider;
pub mod token;
pub mod utils;
