//! Application entry point and dispatch.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use rwa_cli::catalogue::catalogue_report;
use rwa_cli::script::{parse_script, run_script};
use rwa_cli::ReportPresenter;
use rwa_core::ViewportSource;
use rwa_tui::{ShellApp, ShellMessage, TerminalBell};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        rwa_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = ReportPresenter::new(config.json, config.quiet);

    if config.list_pages {
        presenter.present_catalogue(&catalogue_report())?;
        return Ok(());
    }

    if let Some(script) = &config.script {
        return run_headless(config, script, &presenter);
    }

    let viewport = config.viewport_source()?;
    run_tui(config, viewport)
}

fn run_headless(config: &AppConfig, script: &str, presenter: &ReportPresenter) -> Result<()> {
    let width = config.headless_width()?;
    let steps = parse_script(script).context("parsing --script")?;
    tracing::debug!(steps = steps.len(), width, "running script");
    let report = run_script(&steps, width, config.trace);
    presenter.present_report(&report)?;
    Ok(())
}

fn run_tui(config: &AppConfig, viewport: ViewportSource) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded::<ShellMessage>();
    ctrlc_handler(tx)?;

    let mut app = ShellApp::new(rx, viewport);
    if config.haptics {
        app = app.with_haptics(Box::new(TerminalBell));
    }

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(tx: Sender<ShellMessage>) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = tx.send(ShellMessage::Quit);
    })
    .context("setting Ctrl+C handler")
}
