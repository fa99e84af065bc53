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
//! Keystone operations executable.
//!
//! Runs a single operation the way the configuration-management agent does:
//! `keystone-ops -c /etc/salt/minion keystone.role_list profile=openstack1`.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use tracing::{debug, info};
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    prelude::*,
};

use openstack_keystone_ops::client::HttpConnector;
use openstack_keystone_ops::config::Settings;
use openstack_keystone_ops::dispatch::{Arguments, Dispatcher};

/// `OpenStack` Keystone management operations.
///
/// Calls the named operation with `key=value` arguments and prints the
/// resulting mapping or message.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file with the `keystone.*` settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    /// Operation name (`role_list`, `keystone.user_get`, ...).
    function: String,

    /// Operation arguments as `key=value` pairs.
    arguments: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter = Targets::new().with_default(match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(log_layer).init();

    let settings = match &args.config {
        Some(path) => Settings::new(path.clone())?,
        None => Settings::default(),
    };
    debug!("Loaded settings from {:?}", args.config);

    let arguments = Arguments::from_pairs(&args.arguments)?;
    info!("Calling {}", args.function);
    let output = Dispatcher::new(&settings, HttpConnector)
        .call(&args.function, arguments)
        .await
        .wrap_err_with(|| format!("{} failed", args.function))?;
    println!("{output}");
    Ok(())
}
