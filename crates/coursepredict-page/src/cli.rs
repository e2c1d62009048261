use clap::Parser;
use coursepredict_classifiers::LoadMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursepredict-page")]
#[command(author, version, about = "Interactive course category prediction page")]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "8501")]
    pub port: u16,

    /// Listen address
    #[arg(short, long, visible_alias = "listen", default_value = "127.0.0.1")]
    pub address: String,

    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Model artifact path (overrides the config file)
    #[arg(short, long, env = "COURSEPREDICT_MODEL")]
    pub model: Option<PathBuf>,

    /// When to read the artifact: startup or per_request
    #[arg(long, value_parser = parse_load_mode)]
    pub load_mode: Option<LoadMode>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_load_mode(s: &str) -> Result<LoadMode, String> {
    s.parse()
}
