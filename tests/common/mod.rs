#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use newscards::config::Config;
use newscards::model::{samples, Metadata, Post, PostAuthor, PostId};
use newscards::ui::preview::PreviewApp;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

pub fn post(id: &str, title: &str, author: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        subtitle: None,
        url: None,
        publication: None,
        metadata: Metadata {
            author: PostAuthor {
                name: author.to_string(),
                url: None,
            },
            date: "Apr 1".to_string(),
            read_time_minutes: 5,
        },
        image_id: "hero".to_string(),
        image_thumb_id: "hero_thumb".to_string(),
    }
}

/// Render into a fresh buffer and return its rows as strings.
pub fn render_rows(width: u16, height: u16, draw: impl FnOnce(Rect, &mut Buffer)) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(area, &mut buf);
    (0..height)
        .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
        .collect()
}

pub fn make_app() -> PreviewApp {
    let mut app = PreviewApp::new(&Config::default(), samples::popular(), samples::history())
        .expect("default config is valid");
    app.set_screen(SCREEN);
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
