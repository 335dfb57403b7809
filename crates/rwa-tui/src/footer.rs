//! Footer panel for tablet and desktop layouts.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use rwa_core::NavigationContext;

use crate::keymap::key_hints;
use crate::styles::ColorTheme;

/// Rows taken by the footer.
pub const FOOTER_HEIGHT: u16 = 2;

/// Render the footer with keyboard shortcuts and the viewport class.
pub fn render_footer(frame: &mut Frame, area: Rect, ctx: &NavigationContext, theme: &ColorTheme) {
    let hints = key_hints();
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, theme.key_style()));
        let sep = if i + 1 == hints.len() { "" } else { " | " };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    let viewport = Line::from(Span::styled(
        format!("{} {}px ", ctx.device().marker_class(), ctx.viewport_width()),
        theme.muted_style(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(viewport), inner);
}
