use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// stdout 只留給 YAML 輸出，日誌一律寫到 stderr；成功時 stderr 保持空白
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "fixture_generator=debug,generator=debug,info"
    } else {
        "fixture_generator=warn,generator=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
