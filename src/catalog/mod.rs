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
//! # Catalog operations
//!
//! ## Endpoint
//!
//! A network-accessible address, usually a URL, through which you can access a
//! service. Every endpoint belongs to exactly one service and is exposed on one
//! of the `public`, `internal` or `admin` interfaces.
//!
//! ## Service
//!
//! An OpenStack service, such as Compute (nova), Object Storage (swift), or
//! Image service (glance), that provides one or more endpoints through which
//! users can access resources and perform operations.

mod endpoint;
mod service;
pub mod types;

pub use types::{CatalogApi, endpoint::*, service::*};
