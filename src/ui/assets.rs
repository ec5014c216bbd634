//! Image asset resolution.
//!
//! Posts reference images by asset id. The host decides what an id looks
//! like on a terminal by implementing [`ImageAssets`]; unresolved ids are
//! drawn as a shaded placeholder.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

const PLACEHOLDER: &str = "░";

/// Character art for one image asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageArt {
    pub color: Color,
    pub rows: Vec<String>,
}

impl ImageArt {
    pub fn new(color: Color, rows: &[&str]) -> Self {
        Self {
            color,
            rows: rows.iter().map(|row| row.to_string()).collect(),
        }
    }

    fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }
}

pub trait ImageAssets {
    fn resolve(&self, id: &str) -> Option<&ImageArt>;
}

/// In-memory asset table.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<String, ImageArt>,
}

impl AssetCatalog {
    pub fn insert(&mut self, id: impl Into<String>, art: ImageArt) {
        self.images.insert(id.into(), art);
    }

    /// Art for the built-in sample posts.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(
            "post_1",
            ImageArt::new(
                Color::Rgb(0x3d, 0xdc, 0x84),
                &[
                    "▁▂▃▄▅▆▇█▇▆▅▄▃▂▁▁▂▃▄▅▆▇█▇▆▅▄▃▂▁▁▂▃▄▅▆▇█▇▆",
                    "  ╭──╮   ╭──╮    ╭─────╮   ╭──╮   ╭──╮  ",
                    "──┤  ├───┤  ├────┤ app ├───┤  ├───┤  ├──",
                    "  ╰──╯   ╰──╯    ╰─────╯   ╰──╯   ╰──╯  ",
                    "▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔",
                    "▁▂▃▄▅▆▇█▇▆▅▄▃▂▁▁▂▃▄▅▆▇█▇▆▅▄▃▂▁▁▂▃▄▅▆▇█▇▆",
                ],
            ),
        );
        catalog.insert(
            "post_1_thumb",
            ImageArt::new(Color::Rgb(0x3d, 0xdc, 0x84), &["╭──╮", "┤▣▣├", "╰──╯"]),
        );
        catalog.insert(
            "post_3",
            ImageArt::new(
                Color::Rgb(0x42, 0x85, 0xf4),
                &[
                    "◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡",
                    "   ☺     ☻     ☺     ☻     ☺     ☻     ",
                    "  /|\\   /|\\   /|\\   /|\\   /|\\   /|\\    ",
                    "  / \\   / \\   / \\   / \\   / \\   / \\    ",
                    "◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠◡◠",
                ],
            ),
        );
        catalog.insert(
            "post_3_thumb",
            ImageArt::new(Color::Rgb(0x42, 0x85, 0xf4), &[" ☺ ☻ ", " ☻ ☺ "]),
        );
        catalog
    }
}

impl ImageAssets for AssetCatalog {
    fn resolve(&self, id: &str) -> Option<&ImageArt> {
        self.images.get(id)
    }
}

/// Draw the asset `id` filling `area`, centre-cropping oversized art.
pub fn render_image(
    assets: &dyn ImageAssets,
    id: &str,
    area: Rect,
    buf: &mut Buffer,
    placeholder: Color,
) {
    let shade = Style::default().fg(placeholder);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_symbol(PLACEHOLDER).set_style(shade);
        }
    }

    let Some(art) = assets.resolve(id) else {
        tracing::trace!(asset = id, "Unresolved image asset");
        return;
    };

    let (area_w, area_h) = (area.width as usize, area.height as usize);
    let (art_w, art_h) = (art.width(), art.rows.len());
    let col_skip = art_w.saturating_sub(area_w) / 2;
    let row_skip = art_h.saturating_sub(area_h) / 2;
    let x0 = area.x + (area_w.saturating_sub(art_w) / 2) as u16;
    let y0 = area.y + (area_h.saturating_sub(art_h) / 2) as u16;

    let style = Style::default().fg(art.color);
    for (dy, row) in art.rows.iter().skip(row_skip).take(area_h).enumerate() {
        for (dx, ch) in row.chars().skip(col_skip).take(area_w).enumerate() {
            let mut symbol = [0u8; 4];
            buf[(x0 + dx as u16, y0 + dy as u16)]
                .set_symbol(ch.encode_utf8(&mut symbol))
                .set_style(style);
        }
    }
}
