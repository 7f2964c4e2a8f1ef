use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::settings::Config;

/// Installs the global subscriber. Output goes to stdout when
/// `config.log_console` is set, otherwise to a daily rolling file under
/// `config.log_dir`. Keep the returned guard alive for the process lifetime.
pub fn init_logging(config: &Config) -> WorkerGuard {
    let log_level = config.log_level.parse::<Level>().unwrap_or(Level::DEBUG);
    if config.log_console {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
        tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_max_level(log_level)
            .init();
        return guard;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .with_ansi(false)
        .init();
    guard
}
