use std::sync::Arc;

use tokenset_decomposer::{
    DecomposerContract, Erc20MetadataResolver, ExplorerLinks, JsonRpcClient, SetComposer,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Logs go to stderr; stdout is reserved for the report.
pub fn init_tracing() {
    let log_format = std::env::var("TS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Wire the on-chain collaborators once; every decomposition shares them.
pub fn build_composer(config: &Config) -> SetComposer {
    let rpc = Arc::new(JsonRpcClient::with_timeout(
        config.rpc_url.clone(),
        config.request_timeout,
    ));
    let source = Arc::new(DecomposerContract::new(
        rpc.clone(),
        config.decomposer_address,
    ));
    let resolver = Arc::new(Erc20MetadataResolver::new(rpc));

    SetComposer::new(source, resolver)
        .with_explorer(ExplorerLinks::new(config.explorer_url.clone()))
        .with_price_decimals(config.price_decimals)
        .with_price_denomination(config.price_denomination.clone())
}
