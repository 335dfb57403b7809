//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use rwa_core::RootMarkers;

/// Color theme for the dashboard chrome.
pub struct ColorTheme {
    pub accent: Color,
    pub primary: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub success: Color,
    pub alert: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(94, 234, 212),
            primary: Color::Cyan,
            surface: Color::Rgb(18, 19, 24),
            text: Color::Gray,
            muted: Color::DarkGray,
            border: Color::Rgb(63, 73, 72),
            success: Color::Green,
            alert: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Style of the brand mark and panel titles.
    #[must_use]
    pub fn brand_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style of the entry matching the current page.
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the entry under the keyboard cursor.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Background of the page content area.
    #[must_use]
    pub fn surface_style(&self) -> Style {
        Style::default().bg(self.surface)
    }

    #[must_use]
    pub fn figure_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn alert_style(&self) -> Style {
        Style::default().fg(self.alert)
    }

    /// Key hint style in the footer.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }
}

/// Border set keyed off the active root marker.
#[must_use]
pub fn root_border_type(markers: RootMarkers) -> BorderType {
    if markers.mobile_app {
        BorderType::Rounded
    } else if markers.desktop_app {
        BorderType::Thick
    } else {
        BorderType::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rwa_core::DeviceClass;

    fn markers_for(class: DeviceClass) -> RootMarkers {
        let mut markers = RootMarkers::default();
        markers.apply(class);
        markers
    }

    #[test]
    fn border_per_device() {
        assert_eq!(
            root_border_type(markers_for(DeviceClass::Mobile)),
            BorderType::Rounded
        );
        assert_eq!(
            root_border_type(markers_for(DeviceClass::Tablet)),
            BorderType::Plain
        );
        assert_eq!(
            root_border_type(markers_for(DeviceClass::Desktop)),
            BorderType::Thick
        );
    }

    #[test]
    fn active_and_cursor_styles_differ() {
        let theme = ColorTheme::default();
        assert_ne!(theme.active_style(), theme.cursor_style());
        assert_eq!(theme.cursor_style().fg, Some(theme.primary));
        assert_eq!(theme.surface_style().bg, Some(theme.surface));
    }
}
