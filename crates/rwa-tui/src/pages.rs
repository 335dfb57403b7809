//! Page unit rendering.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;
use rwa_core::{NavigationContext, PageUnit};

use crate::styles::{root_border_type, ColorTheme};

/// One row of a page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    Summary,
    Blank,
    Figure(usize),
    ActionsHeader,
    /// Affordance by index into the unit's affordances.
    Affordance(usize),
}

/// Rows of `unit` top to bottom.
#[must_use]
pub fn rows(unit: PageUnit) -> Vec<PageRow> {
    let mut rows = vec![PageRow::Summary, PageRow::Blank];
    let figures = unit.figures().len();
    if figures > 0 {
        rows.extend((0..figures).map(PageRow::Figure));
        rows.push(PageRow::Blank);
    }
    rows.push(PageRow::ActionsHeader);
    rows.extend((0..unit.affordances().len()).map(PageRow::Affordance));
    rows
}

/// Frame of the page. Imported units get the padded mobile container.
fn page_block(unit: PageUnit, ctx: &NavigationContext) -> Block<'static> {
    let block = Block::bordered()
        .title(format!(" {} ", unit.title()))
        .border_type(root_border_type(ctx.markers()));
    if unit.is_imported() && ctx.is_mobile() {
        block.padding(Padding::horizontal(1))
    } else {
        block
    }
}

fn scroll_offset(unit: PageUnit, cursor: Option<usize>, height: u16) -> u16 {
    let Some(cursor) = cursor else { return 0 };
    let position = rows(unit)
        .iter()
        .position(|row| *row == PageRow::Affordance(cursor))
        .unwrap_or(0);
    u16::try_from(position)
        .unwrap_or(u16::MAX)
        .saturating_sub(height.saturating_sub(1))
}

/// Render the mounted unit. `cursor` is the focused affordance, if any.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    ctx: &NavigationContext,
    cursor: Option<usize>,
    theme: &ColorTheme,
) {
    let unit = ctx.selected_unit();
    let figures = unit.figures();
    let affordances = unit.affordances();

    let lines: Vec<Line> = rows(unit)
        .into_iter()
        .map(|row| match row {
            PageRow::Summary => Line::from(Span::styled(unit.summary(), theme.text_style())),
            PageRow::Blank => Line::default(),
            PageRow::Figure(index) => {
                let (label, value) = figures[index];
                Line::from(vec![
                    Span::styled(format!("{label}: "), theme.muted_style()),
                    Span::styled(value, theme.figure_style()),
                ])
            }
            PageRow::ActionsHeader => Line::from(Span::styled("Actions", theme.brand_style())),
            PageRow::Affordance(index) => {
                let style = if cursor == Some(index) {
                    theme.active_style()
                } else {
                    theme.text_style()
                };
                Line::from(Span::styled(format!("[ {} ]", affordances[index].label), style))
            }
        })
        .collect();

    let block = page_block(unit, ctx)
        .border_style(theme.border_style())
        .style(theme.surface_style());
    let visible = block.inner(area).height;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(unit, cursor, visible), 0));
    frame.render_widget(paragraph, area);
}

/// Affordance under a click, if any.
#[must_use]
pub fn hit_test(
    area: Rect,
    ctx: &NavigationContext,
    cursor: Option<usize>,
    column: u16,
    row: u16,
) -> Option<usize> {
    let unit = ctx.selected_unit();
    let inner = page_block(unit, ctx).inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    let offset = scroll_offset(unit, cursor, inner.height);
    let index = usize::from(row - inner.y + offset);
    match rows(unit).get(index) {
        Some(PageRow::Affordance(affordance)) => {
            // Only the bracketed label is clickable.
            let label = unit.affordances()[*affordance].label;
            let width = u16::try_from(label.chars().count() + 4).unwrap_or(u16::MAX);
            (column < inner.x.saturating_add(width)).then_some(*affordance)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rwa_core::PageId;

    fn screen(ctx: &NavigationContext, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_page(frame, area, ctx, None, &ColorTheme::default());
            })
            .unwrap();
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn page_fills_surface_background() {
        let ctx = NavigationContext::new(1280);
        let theme = ColorTheme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_page(frame, area, &ctx, None, &theme);
            })
            .unwrap();
        assert_eq!(buf.buffer[(20, 10)].bg, theme.surface);
    }

    #[test]
    fn rows_of_unit_without_figures() {
        let rows = rows(PageUnit::FrameImport);
        assert_eq!(rows[0], PageRow::Summary);
        assert_eq!(rows[2], PageRow::ActionsHeader);
        assert_eq!(rows.len(), 3 + PageUnit::FrameImport.affordances().len());
    }

    #[test]
    fn renders_title_and_affordances() {
        let mut ctx = NavigationContext::new(1280);
        ctx.navigate(PageId::Assets);
        let text = screen(&ctx, 70, 16);
        assert!(text.contains("Assets"));
        assert!(text.contains("[ Fractional Assets ]"));
        assert!(text.contains("Avg. yield"));
    }

    #[test]
    fn unknown_page_renders_fallback_unit() {
        let mut ctx = NavigationContext::new(1280);
        ctx.navigate("nonexistent-id");
        let text = screen(&ctx, 70, 16);
        assert!(text.contains("Welcome back"));
    }

    #[test]
    fn hit_test_affordances() {
        let ctx = NavigationContext::new(1280);
        let area = Rect::new(0, 0, 60, 20);
        // Authenticated home: summary, blank, 2 figures, blank, header, actions.
        let first = 1 + 6;
        assert_eq!(hit_test(area, &ctx, None, 2, first), Some(0));
        assert_eq!(hit_test(area, &ctx, None, 2, first + 2), Some(2));
        assert_eq!(hit_test(area, &ctx, None, 2, 1), None);
        assert_eq!(hit_test(area, &ctx, None, 50, first), None);
    }

    #[test]
    fn mobile_import_is_padded() {
        let mut ctx = NavigationContext::new(375);
        ctx.navigate(PageId::Main);
        let area = Rect::new(0, 0, 40, 20);
        let inner = page_block(ctx.selected_unit(), &ctx).inner(area);
        assert_eq!(inner.x, 2);

        ctx.resize(1280);
        let inner = page_block(ctx.selected_unit(), &ctx).inner(area);
        assert_eq!(inner.x, 1);
    }
}
