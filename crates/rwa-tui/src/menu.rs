//! Mobile navigation menu overlay.
//!
//! Lists the secondary pages grouped into the fixed category buckets, with a
//! profile card and two quick actions on top.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use rwa_core::catalogue::{group_secondary_items, Icon, MenuBucket, NavigationItem};
use rwa_core::constants::{APP_DESCRIPTION, APP_VERSION_LABEL};
use rwa_core::{NavigationContext, PageId};

use crate::styles::{root_border_type, ColorTheme};

/// Widest the overlay gets, in columns.
const MAX_WIDTH: u16 = 50;

/// Selectable entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    ProfileCard,
    QuickAction { label: &'static str, icon: Icon, target: PageId },
    Item(&'static NavigationItem),
    /// Closes the menu without navigating.
    Settings,
}

impl MenuEntry {
    /// Page this entry navigates to, if any.
    #[must_use]
    pub fn target(&self) -> Option<PageId> {
        match self {
            MenuEntry::ProfileCard => Some(PageId::Profile),
            MenuEntry::QuickAction { target, .. } => Some(*target),
            MenuEntry::Item(item) => Some(item.id),
            MenuEntry::Settings => None,
        }
    }
}

/// One row of the menu body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Title,
    Description,
    Blank,
    /// Selectable entry by index into [`entries`].
    Entry(usize),
    Bucket(MenuBucket),
    Version,
    About,
}

/// Selectable entries top to bottom.
#[must_use]
pub fn entries() -> Vec<MenuEntry> {
    let mut entries = vec![
        MenuEntry::ProfileCard,
        MenuEntry::QuickAction {
            label: "Browse Assets",
            icon: Icon::Briefcase,
            target: PageId::Assets,
        },
        MenuEntry::QuickAction {
            label: "My Portfolio",
            icon: Icon::PieChart,
            target: PageId::Portfolio,
        },
    ];
    for group in group_secondary_items() {
        entries.extend(group.items.into_iter().map(MenuEntry::Item));
    }
    entries.push(MenuEntry::Settings);
    entries
}

/// Rows of the menu body. Buckets without members are not drawn.
#[must_use]
pub fn rows() -> Vec<MenuRow> {
    let mut rows = vec![MenuRow::Title, MenuRow::Description, MenuRow::Blank];
    let mut next = 0;
    let mut entry = |rows: &mut Vec<MenuRow>| {
        rows.push(MenuRow::Entry(next));
        next += 1;
    };

    // Profile card and quick actions.
    for _ in 0..3 {
        entry(&mut rows);
    }
    for group in group_secondary_items() {
        if group.items.is_empty() {
            continue;
        }
        rows.push(MenuRow::Blank);
        rows.push(MenuRow::Bucket(group.bucket));
        for _ in &group.items {
            entry(&mut rows);
        }
    }
    rows.push(MenuRow::Blank);
    entry(&mut rows);
    rows.push(MenuRow::Blank);
    rows.push(MenuRow::Version);
    rows.push(MenuRow::About);
    rows
}

/// Overlay rectangle: right side of the screen, full height.
#[must_use]
pub fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * 9 / 10).min(MAX_WIDTH);
    Rect::new(area.right() - width, area.y, width, area.height)
}

/// Scroll offset that keeps `cursor` visible in `height` rows.
#[must_use]
pub fn scroll_offset(cursor: usize, height: u16) -> u16 {
    let position = rows()
        .iter()
        .position(|row| *row == MenuRow::Entry(cursor))
        .unwrap_or(0);
    let position = u16::try_from(position).unwrap_or(u16::MAX);
    position.saturating_sub(height.saturating_sub(1))
}

fn entry_line(
    entry: &MenuEntry,
    ctx: &NavigationContext,
    focused: bool,
    theme: &ColorTheme,
) -> Line<'static> {
    let active = entry.target().is_some_and(|page| ctx.is_current(page))
        && matches!(entry, MenuEntry::Item(_));
    let mut style = if active {
        theme.active_style()
    } else {
        theme.text_style()
    };
    if focused {
        style = style.patch(theme.cursor_style());
    }
    let chevron = Icon::ChevronRight.glyph();
    let text = match entry {
        MenuEntry::ProfileCard => {
            return Line::from(vec![
                Span::styled(format!(" {} ", Icon::User.glyph()), theme.brand_style()),
                Span::styled("John Doe", style),
                Span::styled("  Premium Member ", theme.muted_style()),
                Span::styled(chevron, theme.muted_style()),
            ]);
        }
        MenuEntry::QuickAction { label, icon, .. } => format!(" {}  {label}", icon.glyph()),
        MenuEntry::Item(item) => {
            let dot = if active { " •" } else { "" };
            format!("   {}  {}{dot} {chevron}", item.icon.glyph(), item.label)
        }
        MenuEntry::Settings => format!(" {}  Settings & Preferences {chevron}", Icon::Settings.glyph()),
    };
    Line::from(Span::styled(text, style))
}

/// Render the overlay over `area`. `cursor` is the focused entry.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    ctx: &NavigationContext,
    cursor: usize,
    theme: &ColorTheme,
) {
    let overlay = overlay_area(area);
    let entries = entries();
    let lines: Vec<Line> = rows()
        .into_iter()
        .map(|row| match row {
            MenuRow::Title => Line::from(Span::styled("Navigation Menu", theme.brand_style())),
            MenuRow::Description => Line::from(Span::styled(
                "Investments, portfolio and account settings.",
                theme.muted_style(),
            )),
            MenuRow::Blank => Line::default(),
            MenuRow::Entry(index) => entry_line(&entries[index], ctx, index == cursor, theme),
            MenuRow::Bucket(bucket) => Line::from(vec![
                Span::styled(format!(" {} ", bucket.icon().glyph()), theme.brand_style()),
                Span::styled(bucket.label(), theme.text_style()),
            ]),
            MenuRow::Version => Line::from(Span::styled(APP_VERSION_LABEL, theme.muted_style())),
            MenuRow::About => Line::from(Span::styled(APP_DESCRIPTION, theme.muted_style())),
        })
        .collect();

    let block = Block::bordered()
        .title(format!(" {} ", Icon::Close.glyph()))
        .border_type(root_border_type(ctx.markers()))
        .border_style(theme.border_style());
    let visible = block.inner(overlay).height;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(cursor, visible), 0));

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

/// What a click on the screen hit while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    Entry(usize),
    /// The close button on the top border.
    Close,
    /// Somewhere inside the overlay that does nothing.
    Inside,
    /// Outside the overlay.
    Outside,
}

/// Map a click to a menu target.
#[must_use]
pub fn hit_test(area: Rect, cursor: usize, column: u16, row: u16) -> MenuHit {
    let overlay = overlay_area(area);
    if column < overlay.x || column >= overlay.right() || row < overlay.y || row >= overlay.bottom() {
        return MenuHit::Outside;
    }
    if row == overlay.y {
        return if column > overlay.x && column <= overlay.x + 3 {
            MenuHit::Close
        } else {
            MenuHit::Inside
        };
    }
    let inner = Block::bordered().inner(overlay);
    if row >= inner.bottom() {
        return MenuHit::Inside;
    }
    let offset = scroll_offset(cursor, inner.height);
    let index = usize::from(row - inner.y + offset);
    match rows().get(index) {
        Some(MenuRow::Entry(entry)) => MenuHit::Entry(*entry),
        _ => MenuHit::Inside,
    }
}
