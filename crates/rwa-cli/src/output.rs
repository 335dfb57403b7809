//! CLI output formatting.

use std::fmt::Write as _;

use rwa_core::{ContextSnapshot, Route};
use serde::Serialize;

use crate::catalogue::CatalogueReport;

/// Format a history as `home → assets → …`.
#[must_use]
pub fn format_history(history: &[Route]) -> String {
    history
        .iter()
        .map(Route::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Single-line summary of a snapshot.
#[must_use]
pub fn format_state(state: &ContextSnapshot) -> String {
    let back = if state.can_go_back { "yes" } else { "no" };
    format!(
        "{} [{:?}] on {} ({}px), back: {back}",
        state.current_page,
        state.unit,
        state.markers.join(" "),
        state.viewport_width,
    )
}

/// Plain-text tables of the catalogue.
#[must_use]
pub fn format_catalogue(report: &CatalogueReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<22} {:<20} {:<8} category", "id", "label", "primary");
    let _ = writeln!(out, "{:-<60}", "");
    for item in report.items {
        let primary = if item.primary { "yes" } else { "no" };
        let _ = writeln!(
            out,
            "{:<22} {:<20} {primary:<8} {:?}",
            item.id.as_str(),
            item.label,
            item.category
        );
    }

    let _ = writeln!(out, "\nMenu");
    for bucket in &report.menu {
        let ids: Vec<&str> = bucket.items.iter().map(|id| id.as_str()).collect();
        let _ = writeln!(out, "  {:<24} {}", bucket.label, ids.join(", "));
    }

    let _ = writeln!(out, "\n{:<22} {:<22} {:<22} desktop", "page", "mobile", "tablet");
    let _ = writeln!(out, "{:-<80}", "");
    for row in &report.registry {
        let _ = writeln!(
            out,
            "{:<22} {:<22} {:<22} {:?}",
            row.page.as_str(),
            format!("{:?}", row.mobile),
            format!("{:?}", row.tablet),
            row.desktop
        );
    }
    let _ = writeln!(out, "{:<22} {:?}", "(unknown)", report.fallback);
    out
}

/// Pretty JSON for `--json`.
///
/// # Errors
///
/// Returns a serialization error if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
