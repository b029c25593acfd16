use clap::Parser;
use fixture_generator::utils::{logger, validation::Validate};
use fixture_generator::{CliConfig, FixtureEngine, RandomNames};

fn main() {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // 參數錯誤時 clap 會印出 usage 並以 2 結束
    let config = CliConfig::parse_from(&args);

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::warn!("⚠️ {} (value is used as-is)", e);
    }

    let seed = config.seed_or_clock();
    tracing::debug!("🎲 Name generator seed: {}", seed);

    let request = config.to_request();
    let mut engine = FixtureEngine::new(RandomNames::from_seed(seed), args);

    let stdout = std::io::stdout();
    if let Err(e) = engine.run(&request, stdout.lock()) {
        tracing::error!("❌ Generation failed: {}", e);
        tracing::error!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
