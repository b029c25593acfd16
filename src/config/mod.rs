use crate::domain::model::{GenerationRequest, DEFAULT_COUNT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_label_value, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "generator")]
#[command(about = "Generate mock integration testing data.")]
#[command(arg_required_else_help = true)]
pub struct CliConfig {
    /// Count of entries to create
    #[arg(short, long, global = true, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for the name generator (defaults to the current time)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate mock service data
    Services {
        /// Name of the service's selector
        #[arg(long, default_value = "")]
        selector: String,
    },
}

impl CliConfig {
    pub fn to_request(&self) -> GenerationRequest {
        match &self.command {
            Commands::Services { selector } => GenerationRequest::new(self.count, selector.clone()),
        }
    }

    /// `--seed` if given, otherwise wall-clock nanoseconds.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    // 超出 i64 奈秒範圍 (2262 年之後) 時退回秒數
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp()) as u64
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Commands::Services { selector } => validate_label_value("selector", selector),
        }
    }
}
