use crate::cli::commands::{Cli, Commands};
use agui::contracts::{ComposeRequest, JobStatus};
use agui::library::LibraryIngest;
use agui::{Composer, Config, gateway};
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

fn build_composer(config: &Config) -> Composer {
    let composer = Composer::new(config.composer.clone());
    if config.seed.demo_data {
        composer.seed_demo_data();
    }
    composer
}

fn load_library_file(path: &Path) -> Result<Vec<LibraryIngest>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read library file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse library file {}", path.display()))
}

async fn run_compose(
    composer: &Composer,
    intent: &str,
    brand: &str,
    library: Option<&Path>,
    seed_ids: Vec<String>,
) -> Result<()> {
    if let Some(path) = library {
        let items = load_library_file(path)?;
        info!(count = items.len(), path = %path.display(), "loading library items");
        for item in items {
            composer.ingest_library(item);
        }
    }

    let mut request = ComposeRequest::new(intent, brand);
    if !seed_ids.is_empty() {
        request = request.with_seed_library_ids(seed_ids);
    }

    let job_id = composer.compose(request)?;
    let record = composer.wait(&job_id).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    if record.status == JobStatus::Failed {
        bail!(
            "job {job_id} failed: {}",
            record.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn serve_addr(config: &Config, host: Option<String>, port: Option<u16>) -> String {
    let mut gateway = config.gateway.clone();
    if let Some(host) = host {
        gateway.host = host;
    }
    if let Some(port) = port {
        gateway.port = port;
    }
    gateway.bind_addr()
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let composer = build_composer(&config);

    match cli.command {
        Commands::Serve { host, port } => {
            let addr = serve_addr(&config, host, port);
            info!("Starting agui gateway on {addr}");
            gateway::run_gateway(&addr, Arc::new(composer)).await?;
            Ok(())
        }
        Commands::Compose {
            intent,
            brand,
            library,
            seed_ids,
        } => run_compose(&composer, &intent, &brand, library.as_deref(), seed_ids).await,
    }
}
