//! Cross-crate scenarios: the headless runner and the TUI model share one
//! navigation core and must agree on every state.

use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use rwa_cli::script::{run_script, Step};
use rwa_core::click_map::CLICK_TARGETS;
use rwa_core::{PageId, Route, ViewportSource};
use rwa_shell_tests::{apply_to_app, fixed_app};
use rwa_tui::{KeyAction, ShellApp, ShellMessage};

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..PageId::ALL.len()).prop_map(|i| Step::Navigate(Route::Page(PageId::ALL[i]))),
        1 => "[a-z-]{1,12}".prop_map(|id| Step::Navigate(Route::from(id))),
        3 => Just(Step::Back),
        2 => (0..CLICK_TARGETS.len()).prop_map(|i| Step::Click(format!(" {} ", CLICK_TARGETS[i].0))),
        1 => "[A-Za-z ]{0,10}".prop_map(Step::Click),
        1 => (0u32..2000).prop_map(Step::Resize),
    ]
}

fn arb_action() -> impl Strategy<Value = KeyAction> {
    prop_oneof![
        Just(KeyAction::Back),
        Just(KeyAction::ToggleFocus),
        Just(KeyAction::Prev),
        Just(KeyAction::Next),
        Just(KeyAction::Activate),
        (0usize..7).prop_map(KeyAction::Jump),
        Just(KeyAction::ToggleMenu),
        Just(KeyAction::ToggleSearch),
        Just(KeyAction::ToggleSidebar),
        Just(KeyAction::Dismiss),
        any::<char>().prop_map(KeyAction::Input),
        Just(KeyAction::Erase),
    ]
}

fn arb_message() -> impl Strategy<Value = ShellMessage> {
    prop_oneof![
        4 => arb_action().prop_map(ShellMessage::KeyPress),
        3 => (0u16..200, 0u16..60).prop_map(|(column, row)| ShellMessage::Click { column, row }),
        1 => (20u16..200, 10u16..60).prop_map(|(width, height)| ShellMessage::Resize { width, height }),
    ]
}

fn render(app: &ShellApp) {
    let mut terminal =
        Terminal::new(TestBackend::new(app.terminal_width, app.terminal_height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
}

fn terminal_app() -> ShellApp {
    let (_tx, rx) = crossbeam_channel::unbounded();
    ShellApp::new(rx, ViewportSource::Terminal { px_per_column: 8 })
}

proptest! {
    #[test]
    fn headless_and_tui_agree(steps in prop::collection::vec(arb_step(), 0..40), width in 0u32..2000) {
        let report = run_script(&steps, width, false);
        let (mut app, tx) = fixed_app(width);
        for step in &steps {
            apply_to_app(&mut app, &tx, step);
        }
        prop_assert_eq!(report.final_state, app.ctx.snapshot());
    }

    #[test]
    fn chrome_state_stays_consistent(messages in prop::collection::vec(arb_message(), 0..60)) {
        let mut app = terminal_app();
        for message in messages {
            app.handle_message(message);

            let history = app.ctx.history();
            prop_assert!(!history.is_empty());
            prop_assert_eq!(history.last().unwrap(), app.ctx.current_page());
            prop_assert_eq!(app.ctx.can_go_back(), history.len() > 1);
            prop_assert_eq!(history[0].clone(), Route::from(PageId::Home));

            // Mobile-only chrome state never survives on larger viewports.
            if !app.ctx.is_mobile() {
                prop_assert!(!app.menu_open);
                prop_assert!(!app.search_visible);
            }
            prop_assert!(app.nav_cursor < app.chrome_len());
        }
        render(&app);
    }
}

#[test]
fn tap_through_every_primary_item() {
    let mut app = terminal_app();
    assert!(app.ctx.is_mobile());
    for (index, page) in [
        PageId::Home,
        PageId::Assets,
        PageId::Portfolio,
        PageId::Wallets,
        PageId::Profile,
    ]
    .into_iter()
    .enumerate()
    {
        app.handle_message(ShellMessage::KeyPress(KeyAction::Jump(index)));
        assert!(app.ctx.is_current(page));
        render(&app);
    }
    assert_eq!(app.ctx.history().len(), 6);
}

#[test]
fn resize_across_breakpoints_swaps_chrome() {
    let mut app = terminal_app();
    app.handle_message(ShellMessage::KeyPress(KeyAction::ToggleMenu));
    assert!(app.menu_open);

    // 96 columns at 8 px is exactly the tablet breakpoint.
    app.handle_message(ShellMessage::Resize {
        width: 96,
        height: 30,
    });
    assert!(app.ctx.is_tablet());
    assert!(!app.menu_open);
    let layout = app.compute_layout(app.screen());
    assert!(layout.sidebar.is_some());
    assert!(layout.header.is_none());

    app.handle_message(ShellMessage::Resize {
        width: 95,
        height: 30,
    });
    assert!(app.ctx.is_mobile());
    let layout = app.compute_layout(app.screen());
    assert!(layout.bottom_nav.is_some());
    render(&app);
}

#[test]
fn imported_markup_clicks_flow_through_the_model() {
    let (mut app, tx) = fixed_app(1280);
    for text in ["Explore", "Buy Now", "not a link", "  Refer & Earn  "] {
        tx.send(ShellMessage::ClickText(text.to_string())).unwrap();
    }
    app.update();
    let pages: Vec<String> = app.ctx.history().iter().map(ToString::to_string).collect();
    assert_eq!(pages, ["home", "details", "assets", "refer-and-earn"]);
}
