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

//! # OpenStack Keystone API types
//!
//! This crate defines the subset of the Keystone v3 REST API request and
//! response bodies that the `keystone-ops` client exchanges with the identity
//! service.

pub mod error;
pub mod scope;
pub mod v3;

/// Return `true` to be used as a positive default for the serde macros.
pub fn default_true() -> bool {
    true
}
