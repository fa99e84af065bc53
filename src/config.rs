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
//! # Configuration
//!
//! Settings are looked up by dotted keys (`keystone.auth_url`), optionally
//! prefixed with a profile name (`openstack1:keystone.auth_url`).

use config::File;
use eyre::{Report, WrapErr};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

mod connection;

pub use connection::{
    ConnectionArgs, ConnectionArgsBuilder, ConnectionArgsBuilderError, DEFAULT_AUTH_URL,
    DEFAULT_ENDPOINT, resolve,
};

/// Parse the boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Key/value configuration store.
pub trait ConfigStore: Send + Sync {
    /// Get the value of the setting.
    fn get(&self, key: &str) -> Option<Value>;
}

impl ConfigStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).cloned()
    }
}

/// Settings read from the configuration file.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Read the settings from the file. The file format is derived from the
    /// file extension.
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let values = config::Config::builder()
            .add_source(File::from(path.clone()))
            .build()
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")?;
        Ok(Self { values })
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl ConfigStore for Settings {
    fn get(&self, key: &str) -> Option<Value> {
        lookup(&self.values, key).cloned()
    }
}

/// Find the value of the key. Literal keys win over nested tables. The
/// profile prefix always refers to a table.
fn lookup<'a>(table: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = table.get(key) {
        return Some(value);
    }
    match key.split_once(':') {
        Some((profile, rest)) => lookup(table.get(profile)?.as_object()?, rest),
        None => lookup_dotted(table, &key.split('.').collect::<Vec<_>>()),
    }
}

fn lookup_dotted<'a>(table: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    (1..=segments.len()).rev().find_map(|i| {
        let value = table.get(&segments[..i].join("."))?;
        if i == segments.len() {
            Some(value)
        } else {
            lookup_dotted(value.as_object()?, &segments[i..])
        }
    })
}
