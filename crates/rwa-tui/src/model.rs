//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use rwa_core::catalogue::{navigation_items, primary_items};
use rwa_core::{DeviceClass, Haptics, NavigationContext, NoHaptics, ViewportSource};

use crate::bottom_nav::{self, render_bottom_nav, BOTTOM_NAV_HEIGHT};
use crate::footer::{render_footer, FOOTER_HEIGHT};
use crate::header::{
    self, render_header, render_search, HeaderAction, HeaderHit, HEADER_HEIGHT, SEARCH_HEIGHT,
};
use crate::keymap::{map_key, KeyAction};
use crate::menu::{self, render_menu, MenuHit};
use crate::messages::ShellMessage;
use crate::pages::{self, render_page};
use crate::sidebar::{self, render_sidebar, SidebarRow};
use crate::styles::ColorTheme;

/// Which part of the screen the keyboard cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Bottom navigation on mobile, sidebar otherwise.
    Chrome,
    /// Affordances of the mounted page unit.
    Page,
}

/// Panels of one frame. Chrome that is not mounted for the device is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Option<Rect>,
    pub search: Option<Rect>,
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub bottom_nav: Option<Rect>,
    pub footer: Option<Rect>,
}

/// TUI application state (Elm Model).
pub struct ShellApp {
    /// Navigation state and device classification.
    pub ctx: NavigationContext,
    /// How terminal size maps to viewport width.
    viewport: ViewportSource,
    /// Feedback for bottom navigation taps.
    haptics: Box<dyn Haptics>,
    /// Message receiver.
    rx: Receiver<ShellMessage>,
    theme: ColorTheme,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    pub focus: Focus,
    /// Cursor over the bottom navigation or sidebar items.
    pub nav_cursor: usize,
    /// Cursor over the page affordances.
    pub page_cursor: usize,
    /// Cursor over the menu entries.
    pub menu_cursor: usize,
    pub menu_open: bool,
    pub search_visible: bool,
    /// Ephemeral search text. Never executed.
    pub search_query: String,
    pub sidebar_collapsed: bool,
}

impl ShellApp {
    /// Create a new app for an 80x24 terminal.
    #[must_use]
    pub fn new(rx: Receiver<ShellMessage>, viewport: ViewportSource) -> Self {
        let (terminal_width, terminal_height) = (80, 24);
        Self {
            ctx: NavigationContext::new(viewport.width_for(terminal_width)),
            viewport,
            haptics: Box::new(NoHaptics),
            rx,
            theme: ColorTheme::default(),
            should_quit: false,
            terminal_width,
            terminal_height,
            focus: Focus::Chrome,
            nav_cursor: 0,
            page_cursor: 0,
            menu_cursor: 0,
            menu_open: false,
            search_visible: false,
            search_query: String::new(),
            sidebar_collapsed: false,
        }
    }

    /// Replace the haptic feedback provider.
    #[must_use]
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Whether printable keys go to the search field.
    #[must_use]
    pub fn search_active(&self) -> bool {
        self.search_visible && !self.menu_open
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: ShellMessage) {
        match msg {
            ShellMessage::KeyPress(action) => self.handle_key_action(action),
            ShellMessage::Click { column, row } => self.handle_click(column, row),
            ShellMessage::Resize { width, height } => self.resize(width, height),
            ShellMessage::Navigate(route) => {
                self.ctx.navigate(route);
                self.on_navigated();
            }
            ShellMessage::Back => self.go_back(),
            ShellMessage::ClickText(text) => {
                if self.ctx.click(&text).is_some() {
                    self.on_navigated();
                }
            }
            ShellMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Back => self.go_back(),
            KeyAction::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Chrome => Focus::Page,
                    Focus::Page => Focus::Chrome,
                };
            }
            KeyAction::Prev => self.move_cursor(false),
            KeyAction::Next => self.move_cursor(true),
            KeyAction::Activate => {
                if self.menu_open {
                    self.activate_menu_entry(self.menu_cursor);
                } else {
                    match self.focus {
                        Focus::Chrome => self.activate_nav(self.nav_cursor),
                        Focus::Page => self.activate_page(self.page_cursor),
                    }
                }
            }
            KeyAction::Jump(index) => self.jump(index),
            KeyAction::ToggleMenu => {
                if self.ctx.is_mobile() {
                    self.menu_open = !self.menu_open;
                    self.menu_cursor = 0;
                }
            }
            KeyAction::ToggleSearch => {
                if self.ctx.is_mobile() {
                    self.toggle_search();
                }
            }
            KeyAction::ToggleSidebar => {
                if !self.ctx.is_mobile() {
                    self.sidebar_collapsed = !self.sidebar_collapsed;
                }
            }
            KeyAction::Dismiss => {
                if self.menu_open {
                    self.menu_open = false;
                } else if self.search_visible {
                    self.toggle_search();
                }
            }
            KeyAction::Input(c) => {
                if self.search_visible {
                    self.search_query.push(c);
                }
            }
            KeyAction::Erase => {
                self.search_query.pop();
            }
            KeyAction::None => {}
        }
    }

    /// Number of items the chrome cursor walks over.
    #[must_use]
    pub fn chrome_len(&self) -> usize {
        if self.ctx.is_mobile() {
            bottom_nav::items().len()
        } else {
            navigation_items().len()
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let (cursor, len) = if self.menu_open {
            (&mut self.menu_cursor, menu::entries().len())
        } else {
            match self.focus {
                Focus::Chrome => {
                    let len = self.chrome_len();
                    (&mut self.nav_cursor, len)
                }
                Focus::Page => (
                    &mut self.page_cursor,
                    self.ctx.selected_unit().affordances().len(),
                ),
            }
        };
        if len == 0 {
            return;
        }
        *cursor = if forward {
            (*cursor + 1) % len
        } else {
            (*cursor + len - 1) % len
        };
    }

    fn go_back(&mut self) {
        if self.ctx.go_back() {
            self.on_navigated();
        }
    }

    /// Reset per-page state after the current page changed.
    fn on_navigated(&mut self) {
        self.page_cursor = 0;
        self.menu_open = false;
        let items: Vec<_> = if self.ctx.is_mobile() {
            bottom_nav::items()
        } else {
            navigation_items().iter().collect()
        };
        if let Some(index) = items.iter().position(|item| self.ctx.is_current(item.id)) {
            self.nav_cursor = index;
        }
    }

    fn toggle_search(&mut self) {
        self.search_visible = !self.search_visible;
        if !self.search_visible {
            self.search_query.clear();
        }
    }

    fn jump(&mut self, index: usize) {
        let Some(item) = primary_items().nth(index) else {
            return;
        };
        if self.ctx.is_mobile() {
            bottom_nav::tap(&mut self.ctx, item, self.haptics.as_ref());
        } else {
            self.ctx.navigate(item.id);
        }
        self.on_navigated();
    }

    fn activate_nav(&mut self, index: usize) {
        if self.ctx.is_mobile() {
            let items = bottom_nav::items();
            let Some(item) = items.get(index) else { return };
            bottom_nav::tap(&mut self.ctx, item, self.haptics.as_ref());
        } else {
            let Some(item) = navigation_items().get(index) else {
                return;
            };
            self.ctx.navigate(item.id);
        }
        self.on_navigated();
    }

    fn activate_page(&mut self, index: usize) {
        let unit = self.ctx.selected_unit();
        match self.ctx.activate(index) {
            Some(target) => {
                tracing::debug!(?unit, %target, "page affordance activated");
                self.on_navigated();
            }
            None => tracing::trace!(?unit, index, "affordance has no target"),
        }
    }

    fn activate_menu_entry(&mut self, index: usize) {
        let Some(entry) = menu::entries().get(index).copied() else {
            return;
        };
        match entry.target() {
            Some(target) => {
                self.ctx.navigate(target);
                self.on_navigated();
            }
            None => self.menu_open = false,
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        let before = self.ctx.device();
        let after = self.ctx.resize(self.viewport.width_for(width));
        if before != after {
            self.on_device_change(after);
        }
    }

    /// Chrome that is no longer mounted loses its local state.
    fn on_device_change(&mut self, device: DeviceClass) {
        if device.is_mobile() {
            self.sidebar_collapsed = false;
        } else {
            self.menu_open = false;
            self.search_visible = false;
            self.search_query.clear();
        }
        self.nav_cursor = self.nav_cursor.min(self.chrome_len() - 1);
        self.on_navigated();
    }

    /// Full screen of the current terminal size.
    #[must_use]
    pub fn screen(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Compute the responsive layout.
    ///
    /// Mobile stacks header, optional search bar, content and bottom
    /// navigation. Tablet and desktop put the sidebar left of the content and
    /// footer.
    #[must_use]
    pub fn compute_layout(&self, area: Rect) -> ShellLayout {
        if self.ctx.is_mobile() {
            let search_height = if self.search_visible { SEARCH_HEIGHT } else { 0 };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Length(search_height),
                    Constraint::Min(3),
                    Constraint::Length(BOTTOM_NAV_HEIGHT),
                ])
                .split(area);
            ShellLayout {
                header: Some(chunks[0]),
                search: self.search_visible.then_some(chunks[1]),
                sidebar: None,
                content: chunks[2],
                bottom_nav: Some(chunks[3]),
                footer: None,
            }
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(sidebar::width(self.sidebar_collapsed)),
                    Constraint::Min(10),
                ])
                .split(area);
            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(FOOTER_HEIGHT)])
                .split(columns[1]);
            ShellLayout {
                header: None,
                search: None,
                sidebar: Some(columns[0]),
                content: main[0],
                bottom_nav: None,
                footer: Some(main[1]),
            }
        }
    }

    fn page_cursor_shown(&self) -> Option<usize> {
        (self.focus == Focus::Page).then_some(self.page_cursor)
    }

    fn nav_cursor_shown(&self) -> Option<usize> {
        (self.focus == Focus::Chrome && !self.menu_open).then_some(self.nav_cursor)
    }

    /// Route a left click to whatever is under it.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.screen();
        if self.menu_open {
            match menu::hit_test(area, self.menu_cursor, column, row) {
                MenuHit::Entry(index) => self.activate_menu_entry(index),
                MenuHit::Close | MenuHit::Outside => self.menu_open = false,
                MenuHit::Inside => {}
            }
            return;
        }

        let layout = self.compute_layout(area);
        if let Some(header_area) = layout.header {
            match header::hit_test(header_area, self.ctx.can_go_back(), column, row) {
                Some(HeaderHit::Back) => return self.go_back(),
                Some(HeaderHit::Action(HeaderAction::Search)) => return self.toggle_search(),
                Some(HeaderHit::Action(HeaderAction::Menu)) => {
                    self.menu_open = true;
                    self.menu_cursor = 0;
                    return;
                }
                Some(HeaderHit::Action(HeaderAction::Notifications)) => {
                    tracing::trace!("notification bell is decorative");
                    return;
                }
                None => {}
            }
        }
        if let Some(nav_area) = layout.bottom_nav {
            if let Some(index) = bottom_nav::hit_test(nav_area, column, row) {
                self.nav_cursor = index;
                return self.activate_nav(index);
            }
        }
        if let Some(sidebar_area) = layout.sidebar {
            match sidebar::hit_test(sidebar_area, self.sidebar_collapsed, column, row) {
                Some(SidebarRow::Item(index)) => {
                    self.nav_cursor = index;
                    return self.activate_nav(index);
                }
                Some(SidebarRow::Toggle) => {
                    self.sidebar_collapsed = !self.sidebar_collapsed;
                    return;
                }
                _ => {}
            }
        }
        if let Some(index) =
            pages::hit_test(layout.content, &self.ctx, self.page_cursor_shown(), column, row)
        {
            self.page_cursor = index;
            self.activate_page(index);
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let layout = self.compute_layout(area);
        let theme = &self.theme;

        if let Some(header_area) = layout.header {
            render_header(frame, header_area, &self.ctx, self.menu_open, theme);
        }
        if let Some(search_area) = layout.search {
            render_search(frame, search_area, &self.search_query, theme);
        }
        if let Some(sidebar_area) = layout.sidebar {
            render_sidebar(
                frame,
                sidebar_area,
                &self.ctx,
                self.sidebar_collapsed,
                self.nav_cursor_shown(),
                theme,
            );
        }

        render_page(frame, layout.content, &self.ctx, self.page_cursor_shown(), theme);

        if let Some(nav_area) = layout.bottom_nav {
            render_bottom_nav(frame, nav_area, &self.ctx, self.nav_cursor_shown(), theme);
        }
        if let Some(footer_area) = layout.footer {
            render_footer(frame, footer_area, &self.ctx, theme);
        }

        // Overlay last so it covers the page.
        if self.menu_open {
            render_menu(frame, area, &self.ctx, self.menu_cursor, theme);
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit, also when the loop failed.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let action = map_key(key_event, self.search_active());
                        self.handle_key_action(action);
                    }
                    Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                        self.handle_click(mouse.column, mouse.row);
                    }
                    Event::Resize(w, h) => self.resize(w, h),
                    _ => {}
                }
            }

            // Process messages pushed from outside the event loop
            self.update();
        }

        Ok(())
    }
}
