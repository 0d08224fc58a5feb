//! LocalKV CLI
//!
//! Command-line interface over one storage namespace.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use localkv::{Config, LocalStorage, Storage};
use tracing_subscriber::{fmt, EnvFilter};

/// LocalKV CLI
#[derive(Parser, Debug)]
#[command(name = "localkv")]
#[command(about = "Persistent browser-style key-value storage")]
#[command(version)]
struct Args {
    /// Root directory holding all namespaces (defaults to ~/.localkv/storage/localstorage)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Namespace to operate on
    #[arg(short, long)]
    namespace: String,

    /// Capacity limit of the data file in bytes
    #[arg(short, long)]
    capacity: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Remove a key
    Remove {
        /// The key to remove
        key: String,
    },

    /// List all keys
    Keys,

    /// Print the number of keys
    Len,

    /// Remove every key
    Clear,

    /// Print every key and value
    Dump,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,localkv=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder();
    if let Some(root) = &args.root {
        builder = builder.root_dir(root);
    }
    if let Some(capacity) = args.capacity {
        builder = builder.capacity_limit(capacity);
    }
    let config = builder.build();

    let mut storage = match LocalStorage::open(&config, &args.namespace) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open storage: {}", e);
            process::exit(1);
        }
    };

    match run(&mut storage, args.command) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

/// Execute one command. Returns `Ok(false)` when a requested key is missing.
fn run(storage: &mut LocalStorage, command: Commands) -> localkv::Result<bool> {
    match command {
        Commands::Get { key } => match storage.get_item(&key)? {
            Some(value) => println!("{}", value),
            None => return Ok(false),
        },
        Commands::Set { key, value } => storage.set_item(&key, &value)?,
        Commands::Remove { key } => storage.remove_item(&key)?,
        Commands::Keys => {
            for key in storage.keys() {
                println!("{}", key);
            }
        }
        Commands::Len => println!("{}", storage.length()),
        Commands::Clear => storage.clear()?,
        Commands::Dump => println!("{}", storage.describe()?),
    }

    Ok(true)
}
