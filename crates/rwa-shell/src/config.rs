//! Application configuration from CLI flags and environment.

use clap::Parser;
use rwa_core::constants::DEFAULT_PX_PER_COLUMN;
use rwa_core::device::parse_width;
use rwa_core::{ShellError, ViewportSource};

/// Terminal width assumed for headless runs without `--viewport-width`.
pub const HEADLESS_COLUMNS: u16 = 160;

/// RWA shell: responsive navigation for the Real World Asset dashboard.
#[derive(Parser, Debug)]
#[command(name = "rwa-shell", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fixed viewport width in pixels (e.g. 375 or 1280px). Ignores terminal size.
    #[arg(long, env = "RWA_VIEWPORT_WIDTH")]
    pub viewport_width: Option<String>,

    /// Pixels per terminal column when the viewport follows the terminal.
    #[arg(long, default_value_t = DEFAULT_PX_PER_COLUMN, env = "RWA_PX_PER_COLUMN")]
    pub px_per_column: u16,

    /// Ring the terminal bell as haptic feedback on bottom navigation taps.
    #[arg(long)]
    pub haptics: bool,

    /// Print the navigation catalogue and page registry, then exit.
    #[arg(long)]
    pub list_pages: bool,

    /// Run comma-separated steps headless (`assets`, `navigate:<id>`, `back`,
    /// `click:<text>`, `resize:<px>`) and print the final state.
    #[arg(long)]
    pub script: Option<String>,

    /// Print reports as JSON.
    #[arg(long)]
    pub json: bool,

    /// Include every intermediate state of a script run.
    #[arg(long, requires = "script")]
    pub trace: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Quiet mode (only print the final page).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output, debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Where the viewport width comes from.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidViewport`] for an unparsable width or a
    /// zero cell width.
    pub fn viewport_source(&self) -> Result<ViewportSource, ShellError> {
        if let Some(width) = &self.viewport_width {
            return parse_width(width).map(ViewportSource::Fixed);
        }
        if self.px_per_column == 0 {
            return Err(ShellError::InvalidViewport(
                "--px-per-column must be positive".to_string(),
            ));
        }
        Ok(ViewportSource::Terminal {
            px_per_column: self.px_per_column,
        })
    }

    /// Viewport width of a headless run.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::viewport_source`].
    pub fn headless_width(&self) -> Result<u32, ShellError> {
        Ok(self.viewport_source()?.width_for(HEADLESS_COLUMNS))
    }
}
