//! Event routing in the preview host.

mod common;

use common::*;
use crossterm::event::KeyCode;
use newscards::model::samples;
use newscards::strings::StringKey;
use newscards::ui::components::popup::PopupDialog;
use newscards::ui::preview::Focus;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// -- keyboard -----------------------------------------------------------------

#[test]
fn enter_on_popular_navigates() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Enter));
    assert_eq!(app.navigations, vec![samples::popular().id]);
}

#[test]
fn tab_moves_focus_to_history() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::History);
    app.on_key(press_key(KeyCode::Enter));
    assert_eq!(app.navigations, vec![samples::history().id]);
}

#[test]
fn dismiss_then_confirm_never_navigates() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    app.on_key(press_key(KeyCode::Char('x')));
    assert!(app.history_card.dialog().is_visible());

    app.on_key(press_key(KeyCode::Enter));
    assert!(!app.history_card.dialog().is_visible());
    assert!(app.navigations.is_empty());
}

#[test]
fn custom_action_key_opens_dialog() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    app.on_key(press_key(KeyCode::Char('a')));
    assert!(app.history_card.dialog().is_visible());
    assert!(app.navigations.is_empty());
}

#[test]
fn quit_is_blocked_while_dialog_open() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    app.on_key(press_key(KeyCode::Char('x')));
    app.on_key(press_key(KeyCode::Char('q')));
    assert!(!app.should_quit);

    app.on_key(press_key(KeyCode::Esc));
    app.on_key(press_key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

// -- mouse --------------------------------------------------------------------

#[test]
fn click_on_popular_card_navigates() {
    let mut app = make_app();
    let areas = app.areas(SCREEN);
    app.on_mouse(click(areas.popular.x + 2, areas.popular.y + 2));
    assert_eq!(app.navigations, vec![samples::popular().id]);
    assert_eq!(app.focus, Focus::Popular);
}

#[test]
fn click_on_history_row_navigates() {
    let mut app = make_app();
    let areas = app.areas(SCREEN);
    app.on_mouse(click(areas.history.x + 10, areas.history.y + 1));
    assert_eq!(app.navigations, vec![samples::history().id]);
    assert_eq!(app.focus, Focus::History);
}

#[test]
fn click_dismiss_then_outside_closes_dialog() {
    let mut app = make_app();
    let areas = app.areas(SCREEN);
    let dismiss = app
        .history_card
        .view(&app.history, &app.strings, &app.theme, &app.assets)
        .layout(areas.history)
        .dismiss;

    app.on_mouse(click(dismiss.x + 1, dismiss.y + 1));
    assert!(app.history_card.dialog().is_visible());

    app.on_mouse(click(0, 0));
    assert!(!app.history_card.dialog().is_visible());
    assert!(app.navigations.is_empty());
}

#[test]
fn click_confirm_closes_dialog() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    app.on_key(press_key(KeyCode::Char('x')));

    let confirm = PopupDialog::new(
        app.strings.get(StringKey::FewerStories),
        app.strings.get(StringKey::FewerStoriesContent),
        app.strings.get(StringKey::Agree),
        &app.theme,
    )
    .layout(SCREEN)
    .confirm;

    app.on_mouse(click(confirm.x + 1, confirm.y));
    assert!(!app.history_card.dialog().is_visible());
    assert!(app.navigations.is_empty());
}

#[test]
fn clicks_behind_dialog_do_not_navigate() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Tab));
    app.on_key(press_key(KeyCode::Char('x')));

    let areas = app.areas(SCREEN);
    app.on_mouse(click(areas.popular.x + 2, areas.popular.y + 2));
    assert!(app.navigations.is_empty());
}

// -- rendering ----------------------------------------------------------------

#[test]
fn renders_both_cards_and_status() {
    let mut app = make_app();
    app.on_key(press_key(KeyCode::Enter));

    let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = (0..SCREEN.height)
        .map(|y| {
            (0..SCREEN.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                + "\n"
        })
        .collect();

    assert!(text.contains("A Little Thing about"));
    assert!(text.contains("Improving Inclusive Design"));
    assert!(text.contains("navigate(dc523f0ed25c)"));
}
