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
//! # Keystone operations
//!
//! [`Keystone`] wraps an authenticated identity service client and exposes
//! the management operations. The operations themselves are implemented in
//! the domain modules ([`crate::identity`], [`crate::resource`],
//! [`crate::assignment`], [`crate::catalog`] and [`crate::token`]).
use std::collections::BTreeMap;

use crate::assignment::AssignmentApi;
use crate::catalog::CatalogApi;
use crate::identity::IdentityApi;
use crate::resource::ResourceApi;
use crate::token::TokenApi;

/// Entities keyed by their name (or another unique attribute).
pub type Listing<T> = BTreeMap<String, T>;

/// Complete identity service client capability.
pub trait KeystoneClient: IdentityApi + ResourceApi + AssignmentApi + CatalogApi + TokenApi {}

impl<T> KeystoneClient for T where
    T: IdentityApi + ResourceApi + AssignmentApi + CatalogApi + TokenApi
{
}

/// Keystone operations bound to the authenticated client.
#[derive(Clone, Debug)]
pub struct Keystone<C> {
    pub(crate) client: C,
}

impl<C: KeystoneClient> Keystone<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

/// Build a listing keyed by the attribute returned by `key`.
///
/// The first entity with the given key is kept.
pub(crate) fn into_listing<T, I, F>(entities: I, key: F) -> Listing<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> String,
{
    let mut listing = Listing::new();
    for entity in entities {
        listing.entry(key(&entity)).or_insert(entity);
    }
    listing
}

/// Human readable deletion confirmation.
pub(crate) fn deleted_message(prefix: &str, id: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{prefix} {id} deleted ({name})"),
        None => format!("{prefix} {id} deleted"),
    }
}
