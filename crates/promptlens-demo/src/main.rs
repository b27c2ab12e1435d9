use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use promptlens_analyzer::{Analyzer, ConfigOverrides};
use promptlens_demo::cli::{Cli, Commands};
use promptlens_demo::config::DemoConfig;
use promptlens_demo::render::{render_result, render_rules};
use promptlens_demo::server::run_server;
use promptlens_demo::state::AppState;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let overrides = ConfigOverrides {
        api_key: cli.api_key.clone(),
        catalog_path: cli.catalog.clone(),
        no_delay: cli.command.no_delay(),
    };
    let config = DemoConfig::load(&cli.config, &overrides)?;
    let analyzer = Analyzer::from_config(&config.analyzer)?;

    match cli.command {
        Commands::Analyze { text, json, .. } => {
            let result = analyzer.analyze_text(text).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_result(&result));
            }
        }

        Commands::Rules { json } => {
            let engine = analyzer.engine();
            if json {
                let rules: Vec<_> = engine.rules().collect();
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                println!("Catalog: {}", engine.catalog_name());
                print!("{}", render_rules(engine.rules()));
            }
        }

        Commands::Serve { port, address, .. } => {
            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;
            let handle = init_metrics()?;
            let state = AppState::new(analyzer, config).with_prometheus(handle);

            println!();
            println!("  PromptLens {}", env!("CARGO_PKG_VERSION"));
            println!("  Catalog: {}", state.analyzer.engine().catalog_name());
            println!("  Listening on http://{}", addr);
            println!();

            run_server(state, addr).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "promptlens=debug,tower_http=debug"
    } else {
        "promptlens=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "promptlens_requests_total",
        "Total number of requests analyzed"
    );
    metrics::describe_counter!(
        "promptlens_decisions_total",
        "Policy decisions by action and category"
    );
    metrics::describe_histogram!(
        "promptlens_analysis_latency_ms",
        metrics::Unit::Milliseconds,
        "End-to-end analysis latency in milliseconds"
    );
    metrics::describe_counter!(
        "promptlens_grounding_errors_total",
        "Grounding calls that failed"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
