//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::{self, Removal};
use crate::config::HostessPaths;
use crate::platform::FileHostsStore;

#[derive(Parser)]
#[command(name = "hostess")]
#[command(version, about = "Hosts file manipulation tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hosts file to edit (overrides HOSTESS_HOSTS_FILE and config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,

    /// Debug output on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append an entry, optionally preceded by a comment line
    #[command(visible_alias = "add")]
    Append {
        alias: String,
        address: String,
        comment: Option<String>,
    },

    /// Remove every line carrying the given address
    #[command(visible_alias = "rm-ip")]
    RemoveAddress { address: String },

    /// Remove every line carrying the given alias (other aliases on those lines go too)
    #[command(visible_alias = "rm-alias")]
    RemoveAlias { alias: String },

    /// List all entries grouped by address family
    #[command(visible_alias = "ls")]
    List {
        /// Print JSON instead of the aligned table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let paths = HostessPaths::resolve(HostessPaths::default_config_dir(), cli.hosts_file)?;
    let store = FileHostsStore::new(&paths.hosts_file);

    match cli.command {
        Commands::Append {
            alias,
            address,
            comment,
        } => {
            commands::append_entry(&store, &alias, &address, comment.as_deref())?;
            println!("added {address} {alias}");
        }
        Commands::RemoveAddress { address } => {
            report_removal(commands::remove_by_address(&store, &address)?);
        }
        Commands::RemoveAlias { alias } => {
            report_removal(commands::remove_by_alias(&store, &alias)?);
        }
        Commands::List { json } => {
            let report = commands::enumerate(&store)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.render());
            }
        }
    }
    Ok(())
}

fn report_removal(removal: Removal) {
    match removal {
        Removal::NoMatch => println!("no entries found to match the specified criteria"),
        Removal::Removed(n) => println!("removed {n} line(s)"),
    }
}
