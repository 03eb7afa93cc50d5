mod config;
mod main_lib;
mod render;

use std::process::ExitCode;

use clap::Parser;
use config::Config;
use main_lib::{build_composer, init_tracing};
use tokenset_decomposer::SetIdentifier;

const DEFAULT_SET: &str = "0xA35Fc5019C4dc509394Bd4d74591a0bF8852c195";

/// Decompose and price a TokenSet.
#[derive(Parser, Debug)]
#[command(name = "tokenset", version)]
struct Cli {
    /// Address of the set to decompose
    #[arg(default_value = DEFAULT_SET)]
    set: SetIdentifier,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// JSON-RPC endpoint, overrides TS_RPC_URL
    #[arg(long)]
    rpc_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing();

    let mut config = Config::from_env()?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }

    tracing::info!("Decomposing {} via {}", cli.set, config.rpc_url);
    let composer = build_composer(&config);
    let report = match composer.decompose(&cli.set).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("Decomposition of {} failed: {}", cli.set, err);
            eprintln!("{}", render::render_failure(&err));
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }
    Ok(ExitCode::SUCCESS)
}
