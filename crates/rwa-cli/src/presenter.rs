//! CLI report presenter.

use serde::Serialize;

use crate::catalogue::CatalogueReport;
use crate::output::{format_catalogue, format_history, format_state, to_json};
use crate::script::ScriptReport;
use crate::ui::{print_error, print_field, print_header};

/// Error payload printed to stderr in JSON mode.
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
    exit_code: i32,
}

fn error_json(error: &str, exit_code: i32) -> serde_json::Result<String> {
    to_json(&ErrorReport { error, exit_code })
}

/// Prints reports as styled text or JSON.
pub struct ReportPresenter {
    json: bool,
    quiet: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Print the outcome of a scripted run.
    ///
    /// Quiet mode prints only the final page id.
    ///
    /// # Errors
    ///
    /// Returns a serialization error in JSON mode.
    pub fn present_report(&self, report: &ScriptReport) -> serde_json::Result<()> {
        if self.json {
            println!("{}", to_json(report)?);
            return Ok(());
        }
        if self.quiet {
            println!("{}", report.final_state.current_page);
            return Ok(());
        }

        if let Some(trace) = &report.trace {
            print_header("Trace");
            for (i, entry) in trace.iter().enumerate() {
                println!("{:>3}. {:<28} {}", i + 1, entry.step.to_string(), format_state(&entry.state));
            }
        }

        let state = &report.final_state;
        print_header("Navigation");
        print_field("Steps", &report.steps.to_string());
        print_field("Current page", state.current_page.as_str());
        print_field("Page unit", &format!("{:?}", state.unit));
        print_field("History", &format_history(&state.history));
        print_field("Can go back", if state.can_go_back { "yes" } else { "no" });
        print_field(
            "Device",
            &format!("{} ({}px)", state.markers.join(" "), state.viewport_width),
        );
        Ok(())
    }

    /// Print the navigation catalogue.
    ///
    /// # Errors
    ///
    /// Returns a serialization error in JSON mode.
    pub fn present_catalogue(&self, report: &CatalogueReport) -> serde_json::Result<()> {
        if self.json {
            println!("{}", to_json(report)?);
            return Ok(());
        }
        if !self.quiet {
            print_header("Pages");
        }
        print!("{}", format_catalogue(report));
        Ok(())
    }

    /// Print an error that ends the run to stderr.
    ///
    /// JSON mode prints an `{error, exit_code}` object, quiet mode the bare
    /// message.
    pub fn present_error(&self, error: &str, exit_code: i32) {
        if self.json {
            if let Ok(json) = error_json(error, exit_code) {
                eprintln!("{json}");
                return;
            }
        }
        if self.quiet {
            eprintln!("{error}");
        } else {
            print_error(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::catalogue_report;
    use crate::script::{parse_script, run_script};

    fn report(trace: bool) -> ScriptReport {
        let steps = parse_script("assets,click:Fractional Assets,back").unwrap();
        run_script(&steps, 1280, trace)
    }

    #[test]
    fn presenter_modes() {
        let presenter = ReportPresenter::new(true, false);
        assert!(presenter.json);
        let presenter = ReportPresenter::new(false, true);
        assert!(presenter.quiet);
    }

    #[test]
    fn present_report_every_mode() {
        for (json, quiet) in [(false, false), (false, true), (true, false)] {
            let presenter = ReportPresenter::new(json, quiet);
            presenter.present_report(&report(true)).unwrap();
            presenter.present_report(&report(false)).unwrap();
        }
    }

    #[test]
    fn present_catalogue_every_mode() {
        for (json, quiet) in [(false, false), (false, true), (true, false)] {
            ReportPresenter::new(json, quiet)
                .present_catalogue(&catalogue_report())
                .unwrap();
        }
    }

    #[test]
    fn present_error_every_mode() {
        for (json, quiet) in [(false, false), (false, true), (true, false)] {
            ReportPresenter::new(json, quiet).present_error("invalid step `jump:3`", 4);
        }
    }

    #[test]
    fn error_json_carries_message_and_code() {
        let json = error_json("unknown page: nope", 4).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "unknown page: nope");
        assert_eq!(value["exit_code"], 4);
    }
}
