//! FreeSWITCH XML configuration service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │              XML CONFIGURATION SERVICE           │
//!                        │                                                  │
//!  mod_xml_curl POST     │  ┌─────────┐    ┌────────────┐    ┌───────────┐  │
//!  ──────────────────────┼─▶│  http   │───▶│  dispatch  │───▶│  modules  │  │
//!  hostname, key_value   │  │ server  │    │ key match  │    │ acl/dist/ │  │
//!                        │  └─────────┘    └─────┬──────┘    │  sofia    │  │
//!                        │       ▲               │ any error └─────┬─────┘  │
//!                        │       │               ▼                 │        │
//!  XML document          │       │         ┌───────────┐   ┌───────┴─────┐  │
//!  ◀─────────────────────┼───────┴─────────│ not found │   │ settings +  │  │
//!                        │                 │ envelope  │   │ render      │  │
//!                        │                 └───────────┘   └──────┬──────┘  │
//!                        │                                        │         │
//!                        └────────────────────────────────────────┼─────────┘
//!                                                                 ▼
//!                                               moduledata/*.json, templates/
//! ```

use std::path::PathBuf;

use clap::Parser;

use freeswitch_xml_config::config::DEFAULT_CONFIG_PATH;
use freeswitch_xml_config::lifecycle::startup;

#[derive(Parser)]
#[command(name = "freeswitch-xml-config")]
#[command(about = "Serves FreeSWITCH configuration sections over mod_xml_curl", long_about = None)]
struct Cli {
    /// Path to config file (JSON, or TOML with a .toml extension)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured listen address (e.g. ":8001")
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::load(&cli.config, cli.listen.as_deref())?;
    startup::run(config).await?;

    Ok(())
}
