//! rwa-shell: responsive navigation shell for the RWA dashboard.

use rwa_cli::ReportPresenter;
use rwa_shell_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        let code = errors::exit_code(&err);
        ReportPresenter::new(config.json, config.quiet).present_error(&format!("{err:#}"), code);
        std::process::exit(code);
    }
}
