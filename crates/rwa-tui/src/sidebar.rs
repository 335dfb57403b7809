//! Tablet and desktop sidebar with the full navigation list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use rwa_core::catalogue::{navigation_items, Icon};
use rwa_core::constants::{BRAND_MARK, BRAND_NAME, BRAND_TAGLINE};
use rwa_core::NavigationContext;

use crate::styles::{root_border_type, ColorTheme};

/// Sidebar width when expanded, in columns.
pub const EXPANDED_WIDTH: u16 = 26;

/// Sidebar width when collapsed to icons.
pub const COLLAPSED_WIDTH: u16 = 7;

/// One row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Brand,
    Tagline,
    Blank,
    /// Navigation item by index into the catalogue.
    Item(usize),
    /// Collapse / expand toggle.
    Toggle,
}

/// Width for the current collapse state.
#[must_use]
pub fn width(collapsed: bool) -> u16 {
    if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

/// Rows top to bottom.
#[must_use]
pub fn rows(collapsed: bool) -> Vec<SidebarRow> {
    let mut rows = vec![SidebarRow::Brand];
    if !collapsed {
        rows.push(SidebarRow::Tagline);
    }
    rows.push(SidebarRow::Blank);
    rows.extend((0..navigation_items().len()).map(SidebarRow::Item));
    rows.push(SidebarRow::Blank);
    rows.push(SidebarRow::Toggle);
    rows
}

/// Render the sidebar. `cursor` is the focused item index, if any.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    ctx: &NavigationContext,
    collapsed: bool,
    cursor: Option<usize>,
    theme: &ColorTheme,
) {
    let items = navigation_items();
    let lines: Vec<Line> = rows(collapsed)
        .into_iter()
        .map(|row| match row {
            SidebarRow::Brand if collapsed => {
                Line::from(Span::styled(format!(" {BRAND_MARK}"), theme.brand_style()))
            }
            SidebarRow::Brand => Line::from(vec![
                Span::styled(format!(" {BRAND_MARK} "), theme.brand_style()),
                Span::styled(BRAND_NAME, theme.text_style()),
            ]),
            SidebarRow::Tagline => {
                Line::from(Span::styled(format!("     {BRAND_TAGLINE}"), theme.muted_style()))
            }
            SidebarRow::Blank => Line::default(),
            SidebarRow::Item(index) => {
                let item = &items[index];
                let mut style = if ctx.is_current(item.id) {
                    theme.active_style()
                } else {
                    theme.text_style()
                };
                if cursor == Some(index) {
                    style = style.patch(theme.cursor_style());
                }
                let text = if collapsed {
                    format!(" {} ", item.icon.glyph())
                } else {
                    format!(" {}  {} ", item.icon.glyph(), item.label)
                };
                Line::from(Span::styled(text, style))
            }
            SidebarRow::Toggle if collapsed => Line::from(Span::styled(
                format!(" {} ", Icon::ChevronRight.glyph()),
                theme.muted_style(),
            )),
            SidebarRow::Toggle => Line::from(Span::styled(
                format!(" {}  Collapse", Icon::MoreHorizontal.glyph()),
                theme.muted_style(),
            )),
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_type(root_border_type(ctx.markers()))
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Row under a click, if any.
#[must_use]
pub fn hit_test(area: Rect, collapsed: bool, column: u16, row: u16) -> Option<SidebarRow> {
    if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
        return None;
    }
    rows(collapsed).get(usize::from(row - area.y)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rwa_core::PageId;

    fn render(ctx: &NavigationContext, collapsed: bool) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width(collapsed), 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_sidebar(frame, area, ctx, collapsed, None, &ColorTheme::default());
            })
            .unwrap()
            .buffer
            .clone()
    }

    fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn expanded_lists_every_item() {
        let ctx = NavigationContext::new(1280);
        let buf = render(&ctx, false);
        let all: String = (0..24).map(|y| row_text(&buf, y)).collect();
        for item in navigation_items() {
            assert!(all.contains(item.label), "{} missing", item.label);
        }
        assert!(all.contains("RWA Platform"));
        assert!(all.contains("Collapse"));
    }

    #[test]
    fn collapsed_hides_labels() {
        let ctx = NavigationContext::new(1280);
        let buf = render(&ctx, true);
        let all: String = (0..24).map(|y| row_text(&buf, y)).collect();
        assert!(!all.contains("Portfolio"));
        assert!(all.contains("◔"));
    }

    #[test]
    fn rows_layout() {
        let expanded = rows(false);
        assert_eq!(expanded[0], SidebarRow::Brand);
        assert_eq!(expanded[3], SidebarRow::Item(0));
        assert_eq!(*expanded.last().unwrap(), SidebarRow::Toggle);
        assert_eq!(rows(true).len(), expanded.len() - 1);
    }

    #[test]
    fn hit_test_items_and_toggle() {
        let area = Rect::new(0, 0, EXPANDED_WIDTH, 30);
        assert_eq!(hit_test(area, false, 3, 3), Some(SidebarRow::Item(0)));
        assert_eq!(hit_test(area, false, 3, 4), Some(SidebarRow::Item(1)));
        let toggle_row = u16::try_from(rows(false).len() - 1).unwrap();
        assert_eq!(hit_test(area, false, 3, toggle_row), Some(SidebarRow::Toggle));
        assert_eq!(hit_test(area, false, 3, 29), None);
        assert_eq!(hit_test(area, false, 40, 3), None);
    }

    #[test]
    fn collapse_does_not_touch_navigation() {
        let mut ctx = NavigationContext::new(1280);
        ctx.navigate(PageId::Rewards);
        let before = ctx.snapshot();
        let _ = render(&ctx, true);
        let _ = render(&ctx, false);
        assert_eq!(ctx.snapshot(), before);
    }
}
