//! Vertical card summarizing a popular post. Stateless: activation anywhere
//! on the card navigates to the article.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::config::CardSizeConfig;
use crate::model::{Post, PostId};
use crate::strings::{StringKey, Strings};
use crate::ui::assets::{render_image, ImageAssets};
use crate::ui::layout::contains;
use crate::ui::mvi::Intent;
use crate::ui::semantics::{Role, SemanticsNode};
use crate::ui::text::wrap_ellipsized;
use crate::ui::theme::Theme;

pub const HERO_HEIGHT: u16 = 5;
pub const TITLE_MAX_LINES: usize = 2;
pub const AUTHOR_MAX_LINES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularCardIntent {
    Activate,
}

impl Intent for PopularCardIntent {}

/// Outer card size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: 34,
            height: 14,
        }
    }
}

impl From<CardSizeConfig> for CardSize {
    fn from(config: CardSizeConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularCardLayout {
    pub card: Rect,
    pub hero: Rect,
    pub content: Rect,
}

pub struct PopularCard<'a> {
    pub post: &'a Post,
    pub strings: &'a Strings,
    pub theme: &'a Theme,
    pub assets: &'a dyn ImageAssets,
    pub size: CardSize,
}

impl<'a> PopularCard<'a> {
    pub fn new(
        post: &'a Post,
        strings: &'a Strings,
        theme: &'a Theme,
        assets: &'a dyn ImageAssets,
    ) -> Self {
        Self {
            post,
            strings,
            theme,
            assets,
            size: CardSize::default(),
        }
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn layout(&self, area: Rect) -> PopularCardLayout {
        let card = Rect {
            x: area.x,
            y: area.y,
            width: self.size.width.min(area.width),
            height: self.size.height.min(area.height),
        };
        let inner = Block::default().borders(Borders::ALL).inner(card);
        let hero = Rect {
            height: HERO_HEIGHT.min(inner.height),
            ..inner
        };
        let content_y = hero.bottom() + 1;
        let content = Rect {
            x: inner.x + 1,
            y: content_y.min(inner.bottom()),
            width: inner.width.saturating_sub(2),
            height: inner.bottom().saturating_sub(content_y),
        };
        PopularCardLayout {
            card,
            hero,
            content,
        }
    }

    /// Title lines, word-wrapped and ellipsized to two lines.
    pub fn title_lines(&self, width: u16) -> Vec<String> {
        wrap_ellipsized(&self.post.title, width as usize, TITLE_MAX_LINES)
    }

    pub fn author_line(&self, width: u16) -> Option<String> {
        wrap_ellipsized(&self.post.metadata.author.name, width as usize, AUTHOR_MAX_LINES)
            .into_iter()
            .next()
    }

    pub fn caption(&self) -> String {
        let metadata = &self.post.metadata;
        self.strings
            .min_read(&metadata.date, metadata.read_time_minutes)
    }

    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<PopularCardIntent> {
        contains(self.layout(area).card, column, row).then_some(PopularCardIntent::Activate)
    }

    pub fn dispatch<F>(&self, intent: PopularCardIntent, navigate: &mut F)
    where
        F: FnMut(&PostId),
    {
        match intent {
            PopularCardIntent::Activate => {
                tracing::debug!(post = %self.post.id, "Popular card navigate");
                navigate(&self.post.id);
            }
        }
    }

    /// One merged button node; the card container exposes no label of its
    /// own, so the click label is set here.
    pub fn semantics(&self) -> SemanticsNode<PopularCardIntent> {
        let metadata = &self.post.metadata;
        SemanticsNode::new(Role::Button)
            .on_click(
                self.strings.get(StringKey::ReadArticle),
                PopularCardIntent::Activate,
            )
            .child(SemanticsNode::text(self.post.title.as_str()))
            .child(SemanticsNode::text(metadata.author.name.as_str()))
            .child(SemanticsNode::text(self.caption()))
    }
}

impl Widget for &PopularCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        let theme = self.theme;
        let typography = &theme.typography;

        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.shapes.medium)
            .border_style(Style::default().fg(theme.colors.border))
            .style(theme.surface())
            .render(layout.card, buf);

        if !layout.hero.is_empty() {
            render_image(
                self.assets,
                &self.post.image_id,
                layout.hero,
                buf,
                theme.colors.placeholder,
            );
        }

        let content = layout.content;
        let mut y = content.y;
        let mut put = |text: String, style: Style, buf: &mut Buffer| {
            if y < content.bottom() {
                buf.set_string(content.x, y, text, style);
                y += 1;
            }
        };

        for line in self.title_lines(content.width) {
            put(line, typography.h6, buf);
        }
        if let Some(author) = self.author_line(content.width) {
            put(author, typography.body2, buf);
        }
        if let Some(caption) = wrap_ellipsized(&self.caption(), content.width as usize, 1)
            .into_iter()
            .next()
        {
            put(caption, theme.medium(typography.body2), buf);
        }
    }
}
