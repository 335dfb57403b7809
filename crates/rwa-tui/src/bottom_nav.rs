//! Mobile bottom navigation over the primary items.

use std::rc::Rc;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use rwa_core::catalogue::{primary_items, NavigationItem};
use rwa_core::constants::HAPTIC_PULSE_MS;
use rwa_core::{Haptics, NavigationContext};

use crate::styles::{root_border_type, ColorTheme};

/// Rows taken by the bottom navigation.
pub const BOTTOM_NAV_HEIGHT: u16 = 3;

/// Items shown in the bar, in order.
#[must_use]
pub fn items() -> Vec<&'static NavigationItem> {
    primary_items().collect()
}

fn cells(area: Rect, count: usize) -> Rc<[Rect]> {
    #[allow(clippy::cast_possible_truncation)]
    let count = count as u32;
    Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(area)
}

/// Tap on an item: best-effort haptic pulse, then navigate.
pub fn tap(ctx: &mut NavigationContext, item: &NavigationItem, haptics: &dyn Haptics) {
    if !haptics.vibrate(HAPTIC_PULSE_MS) {
        tracing::trace!("haptic feedback unavailable");
    }
    ctx.navigate(item.id);
}

/// Render the bottom navigation. `cursor` marks the focused cell, if any.
pub fn render_bottom_nav(
    frame: &mut Frame,
    area: Rect,
    ctx: &NavigationContext,
    cursor: Option<usize>,
    theme: &ColorTheme,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(root_border_type(ctx.markers()))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = items();
    for (index, (item, cell)) in items.iter().zip(cells(inner, items.len()).iter()).enumerate() {
        let active = ctx.is_current(item.id);
        let mut style = if active {
            theme.active_style()
        } else {
            theme.text_style()
        };
        if cursor == Some(index) {
            style = style.patch(theme.cursor_style());
        }
        let text = vec![
            Line::from(Span::styled(item.icon.glyph(), style)),
            Line::from(Span::styled(item.label, style)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *cell);
    }
}

/// Index of the item under a click, if any.
#[must_use]
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::TOP).inner(area);
    if row < inner.y || row >= inner.bottom() {
        return None;
    }
    cells(inner, items().len())
        .iter()
        .position(|cell| column >= cell.x && column < cell.right())
}
