//! Build transfer clauses and print ERC-20 call data.
//!
//! - `selectors`: print the ERC-20 method table
//! - `build`: validate the ERC-20 clause from the config
//! - `encode <method>`: validate the clause and print the call data
//! - `native`: validate a native-currency clause

use alloy_primitives::hex;
use clap::{Parser, Subcommand};
use clausegen::{
    build_erc20_clause, build_native_clause,
    config::{Config, Overrides},
    encode_payload,
};
use erc20::MethodRegistry;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "clausegen")]
#[command(about = "Build transfer clauses and encode ERC-20 call data")]
struct Cli {
    /// Path to a TOML clause description
    #[arg(short, long, env = "CLAUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Recipient account address
    #[arg(long, env = "CLAUSE_RECIPIENT")]
    recipient: Option<String>,

    /// Amount to transfer
    #[arg(long, env = "CLAUSE_VALUE")]
    value: Option<String>,

    /// ERC-20 token contract address
    #[arg(long = "token", env = "CLAUSE_TOKEN")]
    token_address: Option<String>,

    /// Extra account for transferFrom / allowance
    #[arg(long = "aux")]
    aux_address: Option<String>,

    /// Arbitrary data for native clauses
    #[arg(long)]
    data: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every ERC-20 method signature with its selector
    Selectors,

    /// Validate the ERC-20 clause
    Build,

    /// Validate the ERC-20 clause and print the call data for a method
    Encode {
        /// Method name (e.g. transfer) or canonical signature
        method: String,

        /// Address argument of transferFrom / allowance (defaults to --aux)
        #[arg(long)]
        arg: Option<String>,
    },

    /// Validate a native-currency clause
    Native,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    config.apply(Overrides {
        recipient: cli.recipient,
        value: cli.value,
        token_address: cli.token_address,
        aux_address: cli.aux_address,
        data: cli.data,
    });

    let registry = MethodRegistry::new();

    match cli.command {
        Command::Selectors => {
            if cli.json {
                let table: Vec<_> = registry
                    .iter()
                    .map(|(method, selector)| {
                        json!({
                            "method": method.name(),
                            "signature": method.signature(),
                            "selector": hex::encode_prefixed(selector),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for (method, selector) in registry.iter() {
                    println!("{}  {}", hex::encode(selector), method.signature());
                }
            }
        }
        Command::Build => {
            let clause = build_erc20_clause(&config)?;
            info!(token = %clause.token_address(), "ERC-20 clause is valid");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&clause)?);
            } else {
                println!("{clause:#?}");
            }
        }
        Command::Encode { method, arg } => {
            let payload = encode_payload(&registry, &config, &method, arg.as_deref())?;
            if cli.json {
                let tx = json!({
                    "to": config.token_address,
                    "data": hex::encode_prefixed(&payload),
                });
                println!("{}", serde_json::to_string_pretty(&tx)?);
            } else {
                println!("{}", hex::encode_prefixed(&payload));
            }
        }
        Command::Native => {
            let clause = build_native_clause(&config)?;
            info!(recipient = %clause.recipient(), "Native clause is valid");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&clause)?);
            } else {
                println!("{clause:#?}");
            }
        }
    }

    Ok(())
}
