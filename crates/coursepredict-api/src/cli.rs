use clap::Parser;
use coursepredict_classifiers::LoadMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursepredict-api")]
#[command(version, about = "Course category prediction HTTP API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Model artifact path (overrides the config file)
    #[arg(short, long, env = "COURSEPREDICT_MODEL")]
    pub model: Option<PathBuf>,

    /// When to read the artifact: startup or per_request
    #[arg(long, value_parser = parse_load_mode)]
    pub load_mode: Option<LoadMode>,

    /// Answer 400 instead of predicting when `course` is missing or empty
    #[arg(long)]
    pub reject_empty_course: bool,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "5000")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_load_mode(s: &str) -> Result<LoadMode, String> {
    s.parse()
}
