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

//! # OpenStack Keystone operations
//!
//! Management operations of the OpenStack Identity service (users, projects,
//! roles, services, endpoints, EC2 credentials, role assignments and tokens)
//! exposed as named functions that a configuration-management agent can
//! invoke with keyword arguments.
//!
//! Every operation follows the same pattern:
//!
//! - connection settings are resolved from explicit overrides, a named
//!   configuration profile, the global configuration and built-in defaults
//!   ([`config`]);
//! - an authenticated client of the identity service is created
//!   ([`auth`], [`client`]);
//! - entities addressed by name are resolved to their IDs from the service
//!   listing ([`resolver`]);
//! - the call is delegated to the client and the response reshaped into a
//!   plain mapping or a status message ([`keystone::Keystone`],
//!   [`dispatch`]).
//!
//! ```no_run
//! # async fn run() -> Result<(), openstack_keystone_ops::error::KeystoneOpsError> {
//! use openstack_keystone_ops::config::Settings;
//! use openstack_keystone_ops::client::HttpConnector;
//! use openstack_keystone_ops::dispatch::{Arguments, Dispatcher};
//!
//! let settings = Settings::default();
//! let dispatcher = Dispatcher::new(&settings, HttpConnector);
//! let output = dispatcher
//!     .call("role_list", Arguments::from_pairs(["profile=openstack1"])?)
//!     .await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

pub mod assignment;
pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod keystone;
pub mod resolver;
pub mod resource;
pub mod token;
