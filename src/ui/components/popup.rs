use crate::ui::layout::centered_rect_by_size;
use crate::ui::text::wrap_ellipsized;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

/// Cells kept free between the dialog and the screen edge.
pub const POPUP_MARGIN: u16 = 2;
pub const POPUP_MAX_WIDTH: u16 = 48;
const MAX_BODY_LINES: usize = 6;

/// Screen regions of a laid-out popup, used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub frame: Rect,
    /// Confirm label plus one cell of padding on each side.
    pub confirm: Rect,
}

/// Centered modal with a titled border, wrapped body and one confirm control.
pub struct PopupDialog<'a> {
    title: &'a str,
    body: &'a str,
    confirm: &'a str,
    theme: &'a Theme,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, body: &'a str, confirm: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            body,
            confirm,
            theme,
        }
    }

    fn width(&self, area: Rect) -> u16 {
        area.width
            .saturating_sub(POPUP_MARGIN * 2)
            .min(POPUP_MAX_WIDTH)
            .max(1)
    }

    fn body_lines(&self, width: u16) -> Vec<String> {
        let inner = width.saturating_sub(4) as usize;
        wrap_ellipsized(self.body, inner, MAX_BODY_LINES)
    }

    pub fn layout(&self, area: Rect) -> PopupLayout {
        let width = self.width(area);
        let body_rows = self.body_lines(width).len() as u16;
        // border + body + spacer + button row + border
        let height = body_rows + 4;
        let frame = centered_rect_by_size(area, width, height);

        let label_width = (self.confirm.width() as u16).min(frame.width.saturating_sub(4));
        let confirm = Rect {
            x: frame.right().saturating_sub(label_width + 3),
            y: frame.bottom().saturating_sub(2),
            width: (label_width + 2).min(frame.width),
            height: 1,
        };
        PopupLayout { frame, confirm }
    }

    /// Render the dialog and return its layout.
    pub fn render(self, area: Rect, buf: &mut Buffer) -> PopupLayout {
        let layout = self.layout(area);
        let typography = &self.theme.typography;

        let mut lines: Vec<Line> = self
            .body_lines(layout.frame.width)
            .into_iter()
            .map(|text| Line::from(Span::styled(format!(" {text}"), typography.body1)))
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(format!("{} ", self.confirm), typography.button))
                .alignment(Alignment::Right),
        );

        Clear.render(layout.frame, buf);
        let title = Line::from(Span::styled(format!(" {} ", self.title), typography.h6));
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(self.theme.shapes.medium)
            .border_style(Style::default().fg(self.theme.colors.border))
            .style(self.theme.surface());
        Paragraph::new(lines).block(block).render(layout.frame, buf);

        layout
    }
}
