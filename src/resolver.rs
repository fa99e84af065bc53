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
//! # Name resolver
//!
//! Users, projects, roles and services can be addressed either by their ID or
//! by their name. The ID is always used unchanged when given. A name is
//! resolved by fetching the listing of the entities (filtered by name on the
//! server side where the API supports it) and looking up the exact,
//! case-sensitive name. When the listing contains the name more than once the
//! first entity in the listing order wins.
use std::collections::HashMap;
use std::fmt;

use crate::error::KeystoneOpsError;

/// Kind of the identity service entity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    /// EC2 credential.
    Ec2Credential,
    /// Project (tenant).
    Project,
    /// Role.
    Role,
    /// Catalog service.
    Service,
    /// User.
    User,
}

impl EntityKind {
    /// Capitalized name of the kind.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Ec2Credential => "EC2 credential",
            Self::Project => "Project",
            Self::Role => "Role",
            Self::Service => "Service",
            Self::User => "User",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ec2Credential => "ec2 credential",
            Self::Project => "project",
            Self::Role => "role",
            Self::Service => "service",
            Self::User => "user",
        })
    }
}

/// Reference to an entity by its ID or by its name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntityRef {
    /// Entity ID. Takes precedence over the name.
    pub id: Option<String>,
    /// Entity name.
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: Option<String>, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Reference the entity by the ID.
    pub fn id<S: Into<String>>(id: S) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    /// Reference the entity by the name.
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Whether neither the ID nor the name is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}

/// Entity that can be looked up by its name.
pub trait Named {
    /// The entity ID.
    fn id(&self) -> &str;
    /// The entity name.
    fn name(&self) -> &str;
}

/// One-shot index of the entity names to their IDs.
#[derive(Debug, Default)]
pub struct NameIndex<'a> {
    ids: HashMap<&'a str, &'a str>,
}

impl<'a> NameIndex<'a> {
    /// Build the index from the listing. The first occurrence of a name wins.
    pub fn new<T, I>(entities: I) -> Self
    where
        T: Named + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut ids = HashMap::new();
        for entity in entities {
            ids.entry(entity.name()).or_insert(entity.id());
        }
        Self { ids }
    }

    /// Get the ID of the entity with the name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.ids.get(name).copied()
    }

    /// Resolve the name into the ID.
    pub fn resolve(&self, kind: EntityKind, name: &str) -> Result<String, KeystoneOpsError> {
        self.get(name)
            .map(ToString::to_string)
            .ok_or(KeystoneOpsError::Unresolved(kind))
    }
}
