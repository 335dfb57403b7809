//! Headless navigation scripts.
//!
//! A script is a comma-separated list of steps replayed against a fresh
//! [`NavigationContext`]:
//!
//! - `<page-id>` or `navigate:<id>`: push a page. A bare id must name a known
//!   page; `navigate:` stores any id verbatim, like the chrome would.
//! - `back`: go back one page.
//! - `click:<text>`: click text inside imported markup.
//! - `resize:<px>`: resize the viewport.

use std::str::FromStr;

use rwa_core::device::parse_width;
use rwa_core::{ContextSnapshot, DeviceClass, NavigationContext, PageId, Route, ShellError};
use serde::Serialize;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "arg", rename_all = "kebab-case")]
pub enum Step {
    Navigate(Route),
    Back,
    Click(String),
    Resize(u32),
}

fn invalid(step: &str, reason: impl Into<String>) -> ShellError {
    ShellError::InvalidStep {
        step: step.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for Step {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let Some((action, arg)) = raw.split_once(':') else {
            if raw == "back" {
                return Ok(Step::Back);
            }
            return PageId::from_str(raw)
                .map(|page| Step::Navigate(Route::Page(page)))
                .map_err(|err| invalid(raw, err.to_string()));
        };
        match action.trim() {
            "navigate" => {
                let id = arg.trim();
                if id.is_empty() {
                    return Err(invalid(raw, "missing page id"));
                }
                Ok(Step::Navigate(Route::from(id)))
            }
            "click" => Ok(Step::Click(arg.to_string())),
            "resize" => parse_width(arg)
                .map(Step::Resize)
                .map_err(|err| invalid(raw, err.to_string())),
            other => Err(invalid(raw, format!("unknown action `{other}`"))),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Navigate(route) => write!(f, "navigate:{route}"),
            Step::Back => f.write_str("back"),
            Step::Click(text) => write!(f, "click:{text}"),
            Step::Resize(width) => write!(f, "resize:{width}"),
        }
    }
}

/// Parse a comma-separated script. Blank segments are skipped.
///
/// # Errors
///
/// Returns [`ShellError::InvalidStep`] for the first step that does not parse.
pub fn parse_script(script: &str) -> Result<Vec<Step>, ShellError> {
    script
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(Step::from_str)
        .collect()
}

/// What a step did to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepOutcome {
    Navigated,
    WentBack,
    /// Back at depth one, or click text with no target.
    Ignored,
    Resized { device: DeviceClass },
}

/// A step and the state right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub step: Step,
    pub outcome: StepOutcome,
    pub state: ContextSnapshot,
}

/// Result of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    pub steps: usize,
    pub final_state: ContextSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEntry>>,
}

/// Apply one step to `ctx`.
pub fn apply(ctx: &mut NavigationContext, step: &Step) -> StepOutcome {
    match step {
        Step::Navigate(route) => {
            ctx.navigate(route.clone());
            StepOutcome::Navigated
        }
        Step::Back => {
            if ctx.go_back() {
                StepOutcome::WentBack
            } else {
                StepOutcome::Ignored
            }
        }
        Step::Click(text) => match ctx.click(text) {
            Some(_) => StepOutcome::Navigated,
            None => StepOutcome::Ignored,
        },
        Step::Resize(width) => StepOutcome::Resized {
            device: ctx.resize(*width),
        },
    }
}

/// Replay `steps` from a fresh context `width` pixels wide.
#[must_use]
pub fn run_script(steps: &[Step], width: u32, trace: bool) -> ScriptReport {
    let mut ctx = NavigationContext::new(width);
    let mut entries = trace.then(Vec::new);
    for step in steps {
        let outcome = apply(&mut ctx, step);
        tracing::debug!(%step, ?outcome, "script step");
        if let Some(entries) = entries.as_mut() {
            entries.push(TraceEntry {
                step: step.clone(),
                outcome,
                state: ctx.snapshot(),
            });
        }
    }
    ScriptReport {
        steps: steps.len(),
        final_state: ctx.snapshot(),
        trace: entries,
    }
}
