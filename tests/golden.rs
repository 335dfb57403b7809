//! Golden file integration tests.
//!
//! Reads tests/testdata/navigation_golden.json and verifies that the headless
//! script runner and the TUI model end every scenario in the recorded state.

use serde::Deserialize;

use rwa_cli::script::{parse_script, run_script};
use rwa_core::{ContextSnapshot, Route};
use rwa_shell_tests::{apply_to_app, fixed_app};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    script: String,
    width: u32,
    current_page: String,
    history: Vec<String>,
    unit: String,
    device: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/navigation_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn check(scenario: &Scenario, state: &ContextSnapshot, route: &str) {
    let json = serde_json::to_value(state).unwrap();
    assert_eq!(json["current_page"], scenario.current_page.as_str(), "{route}: {}", scenario.script);
    assert_eq!(json["unit"], scenario.unit.as_str(), "{route}: {}", scenario.script);
    assert_eq!(json["device"], scenario.device.as_str(), "{route}: {}", scenario.script);
    let history: Vec<String> = state.history.iter().map(|r| r.to_string()).collect();
    assert_eq!(history, scenario.history, "{route}: {}", scenario.script);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_loads() {
    let data = load_golden_data();
    assert!(data.scenarios.len() >= 10);
}

#[test]
fn golden_headless_runs() {
    for scenario in &load_golden_data().scenarios {
        let steps = parse_script(&scenario.script).unwrap();
        let report = run_script(&steps, scenario.width, false);
        check(scenario, &report.final_state, "headless");
    }
}

#[test]
fn golden_tui_model() {
    for scenario in &load_golden_data().scenarios {
        let (mut app, tx) = fixed_app(scenario.width);
        for step in parse_script(&scenario.script).unwrap() {
            apply_to_app(&mut app, &tx, &step);
        }
        check(scenario, &app.ctx.snapshot(), "tui");
    }
}

#[test]
fn golden_histories_end_at_current_page() {
    for scenario in &load_golden_data().scenarios {
        assert_eq!(
            scenario.history.last().map(String::as_str),
            Some(scenario.current_page.as_str())
        );
        assert_eq!(scenario.history[0], "home");
        assert_eq!(Route::from(scenario.history[0].as_str()).to_string(), "home");
    }
}
