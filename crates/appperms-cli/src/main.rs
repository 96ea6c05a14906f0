//! appperms command-line front end
//!
//! Inspects and toggles AppArmor prompting through the local snapd socket.
//!
//! # Usage
//!
//! ```bash
//! appperms status
//! appperms enable
//! appperms folders --json
//! appperms remove simple-notepad --interface home
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use appperms::{DEFAULT_SOCKET_PATH, PermissionServer, SnapdTransport};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "appperms")]
#[command(about = "Inspect and toggle snapd AppArmor prompting")]
struct Args {
    /// Path to the snapd socket
    #[arg(long, env = "APPPERMS_SNAPD_SOCKET", default_value = DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Seconds to wait for each daemon request
    #[arg(long, env = "APPPERMS_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn permission prompting on
    Enable,
    /// Turn permission prompting off
    Disable,
    /// Print whether permission prompting is on
    Status,
    /// Print whether any custom rule exists
    CustomRules,
    /// List folder permissions derived from custom rules
    Folders {
        /// Print JSON instead of one line per folder
        #[arg(long)]
        json: bool,
    },
    /// List custom rules
    Rules {
        /// Only show rules for this snap
        #[arg(long)]
        snap: Option<String>,

        /// Print JSON instead of one line per rule
        #[arg(long)]
        json: bool,
    },
    /// Remove every custom rule of a snap
    Remove {
        snap: String,

        #[arg(long, default_value = "home")]
        interface: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "appperms=trace"
    } else {
        "appperms=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(socket = %args.socket.display(), timeout = args.timeout, "connecting to snapd");
    let transport =
        SnapdTransport::new(&args.socket).with_timeout(Duration::from_secs(args.timeout));
    let server = PermissionServer::new(transport);

    match args.command {
        Command::Enable => {
            server
                .enable_app_permissions()
                .await
                .context("failed to enable permission prompting")?;
            info!("Permission prompting enabled");
        }
        Command::Disable => {
            server
                .disable_app_permissions()
                .await
                .context("failed to disable permission prompting")?;
            info!("Permission prompting disabled");
        }
        Command::Status => {
            let enabled = server
                .is_app_permissions_enabled()
                .await
                .context("failed to query permission prompting")?;
            println!("{}", if enabled { "enabled" } else { "disabled" });
        }
        Command::CustomRules => {
            let applied = server
                .are_custom_rules_applied()
                .await
                .context("failed to query custom rules")?;
            println!("{}", if applied { "yes" } else { "no" });
        }
        Command::Folders { json } => {
            let folders = server
                .list_personal_folders_permissions()
                .await
                .context("failed to list folder permissions")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&folders)?);
            } else {
                for folder in &folders {
                    println!("{folder}");
                }
            }
        }
        Command::Rules { snap, json } => {
            let rules = server.list_rules().await.context("failed to list custom rules")?;
            let selected: Vec<_> = match snap.as_deref() {
                Some(name) => rules.for_snap(name).collect(),
                None => rules.rules().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                for rule in selected {
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        rule.id,
                        rule.snap,
                        rule.interface,
                        rule.outcome,
                        rule.constraints.path_pattern,
                        rule.lifespan
                    );
                }
            }
        }
        Command::Remove { snap, interface } => {
            let removed = server
                .remove_app_permission(&snap, &interface)
                .await
                .with_context(|| format!("failed to remove rules for {snap}"))?;
            info!("Removed {} rule(s) for {} ({})", removed.len(), snap, interface);
        }
    }

    Ok(())
}
