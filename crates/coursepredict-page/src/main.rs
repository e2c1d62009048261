use clap::Parser;
use coursepredict_classifiers::SharedModel;
use coursepredict_page::{run_server, Cli, PageConfig, PageState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = PageConfig::load(&cli)?;
    let model = SharedModel::load(config.model.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load model {:?}: {}", config.model.path, e))?;

    let addr: SocketAddr = format!("{}:{}", cli.address, cli.port).parse()?;

    println!();
    println!("  Course Keyword Prediction Page");
    println!();
    println!("  Model:      {}", config.model.path.display());
    println!("  Load mode:  {:?}", config.model.load_mode);
    println!();
    println!("  Open http://{} in your browser", addr);
    println!();

    run_server(PageState::new(config, model), addr).await
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "coursepredict_page=debug,coursepredict_classifiers=debug,tower_http=debug"
    } else {
        "coursepredict_page=info,coursepredict_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
