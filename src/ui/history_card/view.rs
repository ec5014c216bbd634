use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::model::Post;
use crate::strings::{StringKey, Strings};
use crate::ui::assets::{render_image, ImageAssets};
use crate::ui::components::popup::{PopupDialog, PopupLayout};
use crate::ui::history_card::intent::HistoryCardIntent;
use crate::ui::history_card::state::DialogState;
use crate::ui::layout::contains;
use crate::ui::text::wrap_ellipsized;
use crate::ui::theme::Theme;

/// Rows occupied by one history card.
pub const HISTORY_ROW_HEIGHT: u16 = 5;
pub const THUMB_WIDTH: u16 = 6;
pub const THUMB_HEIGHT: u16 = 3;
/// Minimum touch target for the dismiss icon.
pub const DISMISS_TARGET: u16 = 3;
pub const DISMISS_GLYPH: &str = "✕";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCardLayout {
    pub row: Rect,
    pub thumbnail: Rect,
    pub text: Rect,
    pub dismiss: Rect,
}

/// Render-only view of a history card. All inputs are borrowed.
pub struct HistoryCardView<'a> {
    pub post: &'a Post,
    pub strings: &'a Strings,
    pub theme: &'a Theme,
    pub assets: &'a dyn ImageAssets,
    pub dialog: DialogState,
}

impl<'a> HistoryCardView<'a> {
    pub fn layout(&self, area: Rect) -> HistoryCardLayout {
        let height = area.height.min(HISTORY_ROW_HEIGHT);
        let row = Rect { height, ..area };

        let thumbnail = Rect {
            x: row.x + 1,
            y: row.y + 1,
            width: THUMB_WIDTH.min(row.width.saturating_sub(2)),
            height: THUMB_HEIGHT.min(row.height.saturating_sub(1)),
        };

        let dismiss_size = DISMISS_TARGET.min(row.height).min(row.width);
        let dismiss = Rect {
            x: row.right().saturating_sub(dismiss_size),
            y: row.y + row.height.saturating_sub(dismiss_size) / 2,
            width: dismiss_size,
            height: dismiss_size,
        };

        let text_x = thumbnail.right() + 1;
        let text = Rect {
            x: text_x,
            y: row.y + 1,
            width: dismiss.x.saturating_sub(text_x),
            height: row.height.saturating_sub(2),
        };

        HistoryCardLayout {
            row,
            thumbnail,
            text,
            dismiss,
        }
    }

    fn caption(&self) -> String {
        let metadata = &self.post.metadata;
        format!(
            "{} - {} min read",
            metadata.author.name, metadata.read_time_minutes
        )
    }

    fn dialog_popup(&self) -> PopupDialog<'a> {
        PopupDialog::new(
            self.strings.get(StringKey::FewerStories),
            self.strings.get(StringKey::FewerStoriesContent),
            self.strings.get(StringKey::Agree),
            self.theme,
        )
    }

    /// Draw the dialog over `screen` when it is shown.
    pub fn render_dialog(&self, screen: Rect, buf: &mut Buffer) -> Option<PopupLayout> {
        self.dialog
            .is_visible()
            .then(|| self.dialog_popup().render(screen, buf))
    }

    /// Map a click at (`column`, `row`) to an intent.
    ///
    /// While the dialog is shown it is modal: only its confirm control and
    /// the area outside it react.
    pub fn hit_test(
        &self,
        area: Rect,
        screen: Rect,
        column: u16,
        row: u16,
    ) -> Option<HistoryCardIntent> {
        if self.dialog.is_visible() {
            let popup = self.dialog_popup().layout(screen);
            if contains(popup.confirm, column, row) {
                return Some(HistoryCardIntent::Confirm);
            }
            if !contains(popup.frame, column, row) {
                return Some(HistoryCardIntent::DismissRequest);
            }
            return None;
        }

        let layout = self.layout(area);
        if contains(layout.dismiss, column, row) {
            Some(HistoryCardIntent::Dismiss)
        } else if contains(layout.row, column, row) {
            Some(HistoryCardIntent::ActivateRow)
        } else {
            None
        }
    }
}

impl Widget for &HistoryCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        let theme = self.theme;
        let typography = &theme.typography;

        buf.set_style(layout.row, theme.surface());

        if !layout.thumbnail.is_empty() {
            render_image(
                self.assets,
                &self.post.image_thumb_id,
                layout.thumbnail,
                buf,
                theme.colors.placeholder,
            );
        }

        let width = layout.text.width as usize;
        let title_rows = layout.text.height.saturating_sub(1) as usize;
        let mut y = layout.text.y;
        for line in wrap_ellipsized(&self.post.title, width, title_rows.max(1)) {
            if y >= layout.text.bottom() {
                break;
            }
            buf.set_string(layout.text.x, y, line, typography.subtitle1);
            y += 1;
        }
        if y < layout.text.bottom() {
            for line in wrap_ellipsized(&self.caption(), width, 1) {
                buf.set_string(layout.text.x, y, line, theme.medium(typography.body2));
            }
        }

        if !layout.dismiss.is_empty() {
            let glyph_x = layout.dismiss.x + layout.dismiss.width / 2;
            let glyph_y = layout.dismiss.y + layout.dismiss.height / 2;
            buf.set_string(
                glyph_x,
                glyph_y,
                DISMISS_GLYPH,
                theme.medium(Style::default().fg(theme.colors.on_surface)),
            );
        }

        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.colors.border))
            .render(layout.row, buf);
    }
}
