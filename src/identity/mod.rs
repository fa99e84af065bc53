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
//! # Identity operations
//!
//! Following identity concepts are covered:
//!
//! ## User
//!
//! A digital representation of a person, system, or service that uses
//! OpenStack cloud services. Users have a login and can access resources by
//! using assigned tokens. A user name is unique within its domain.
//!
//! ## EC2 credential
//!
//! An access/secret key pair issued by the identity service to a user for a
//! project, used for authenticating against EC2-compatible APIs.

mod ec2;
pub mod types;
mod user;

pub use types::{IdentityApi, ec2::*, user::*};
