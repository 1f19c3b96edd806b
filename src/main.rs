use anyhow::{Context, Result};
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tars_proxy_lib::{AskRequest, ErrorBody, HttpUpstream, ManualCorpus, Orchestrator, ProxyConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Reads one `/ask` payload from stdin and prints the normalised reply.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ProxyConfig::from_env().context("loading configuration")?;
    let corpus = Arc::new(ManualCorpus::load(&config.manual_path));
    let upstream = HttpUpstream::new(config.upstream_url.clone(), config.timeout())?;
    let orchestrator = Orchestrator::new(corpus, Arc::new(upstream), config.timeout());

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("reading request from stdin")?;
    let request: AskRequest = serde_json::from_str(&raw).context("parsing request JSON")?;

    match orchestrator.handle(&request).await {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            println!("{}", serde_json::to_string(&ErrorBody::from(&e))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
