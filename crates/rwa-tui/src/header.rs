//! Mobile header: page title, search toggle, notifications and menu toggle.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use rwa_core::catalogue::{find_item, Icon};
use rwa_core::constants::{BRAND_MARK, BRAND_NAME, BRAND_TAGLINE, SEARCH_PLACEHOLDER};
use rwa_core::NavigationContext;

use crate::styles::{root_border_type, ColorTheme};

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 3;

/// Rows taken by the search bar when it is visible.
pub const SEARCH_HEIGHT: u16 = 3;

/// Columns per action button.
const ACTION_WIDTH: u16 = 3;

/// Columns of the back affordance.
const BACK_WIDTH: u16 = 2;

/// Buttons on the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Search,
    Notifications,
    Menu,
}

const HEADER_ACTIONS: [HeaderAction; 3] = [
    HeaderAction::Search,
    HeaderAction::Notifications,
    HeaderAction::Menu,
];

/// What a click on the header landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Back,
    Action(HeaderAction),
}

/// Title for the current page, or the brand name when it has no item.
#[must_use]
pub fn current_label(ctx: &NavigationContext) -> &'static str {
    find_item(ctx.current_page()).map_or(BRAND_NAME, |item| item.label)
}

fn actions_area(area: Rect) -> Rect {
    #[allow(clippy::cast_possible_truncation)]
    let width = (ACTION_WIDTH * HEADER_ACTIONS.len() as u16).min(area.width);
    Rect::new(area.right().saturating_sub(width), area.y, width, 1)
}

/// Render the header panel.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    ctx: &NavigationContext,
    menu_open: bool,
    theme: &ColorTheme,
) {
    let mut title = Vec::new();
    if ctx.can_go_back() {
        title.push(Span::styled(
            format!("{} ", Icon::ChevronLeft.glyph()),
            theme.brand_style(),
        ));
    }
    title.push(Span::styled(format!("[{BRAND_MARK}] "), theme.brand_style()));
    title.push(Span::styled(current_label(ctx), theme.text_style()));

    let text = vec![
        Line::from(title),
        Line::from(Span::styled(BRAND_TAGLINE, theme.muted_style())),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(root_border_type(ctx.markers()))
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);

    let menu_icon = if menu_open { Icon::Close } else { Icon::Menu };
    let actions = Line::from(vec![
        Span::styled(format!(" {} ", Icon::Search.glyph()), theme.text_style()),
        Span::styled(format!(" {} ", Icon::Bell.glyph()), theme.alert_style()),
        Span::styled(format!(" {} ", menu_icon.glyph()), theme.text_style()),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(actions), actions_area(area));
}

/// Render the ephemeral search input below the header.
pub fn render_search(frame: &mut Frame, area: Rect, query: &str, theme: &ColorTheme) {
    let content = if query.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, theme.muted_style())
    } else {
        Span::styled(query.to_string(), theme.text_style())
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", Icon::Search.glyph()), theme.muted_style()),
        content,
    ]);
    let block = Block::bordered().border_style(theme.border_style());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Map a click inside the header area to what it hit.
#[must_use]
pub fn hit_test(area: Rect, can_go_back: bool, column: u16, row: u16) -> Option<HeaderHit> {
    if row != area.y || column < area.x || column >= area.right() {
        return None;
    }
    if can_go_back && column < area.x + BACK_WIDTH {
        return Some(HeaderHit::Back);
    }
    let actions = actions_area(area);
    if column >= actions.x {
        let index = usize::from((column - actions.x) / ACTION_WIDTH);
        return HEADER_ACTIONS.get(index).copied().map(HeaderHit::Action);
    }
    None
}
