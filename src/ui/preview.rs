//! Interactive preview hosting one popular card and one history card.
//!
//! The preview plays the host's part: it supplies posts, theme, strings and
//! assets, routes terminal events to the cards, and records navigate calls
//! instead of opening articles.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Config;
use crate::error::Result;
use crate::model::{Post, PostId};
use crate::strings::{StringKey, Strings};
use crate::ui::assets::AssetCatalog;
use crate::ui::history_card::{HistoryCard, HistoryCardIntent, HISTORY_ROW_HEIGHT};
use crate::ui::input::{history_key_intent, popular_key_intent};
use crate::ui::popular_card::{CardSize, PopularCard, PopularCardIntent};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Popular,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewAreas {
    pub popular: Rect,
    pub history: Rect,
    pub status: Rect,
}

pub struct PreviewApp {
    pub popular: Post,
    pub history: Post,
    pub history_card: HistoryCard,
    pub focus: Focus,
    pub strings: Strings,
    pub theme: Theme,
    pub assets: AssetCatalog,
    pub card_size: CardSize,
    /// Every navigate call received, oldest first.
    pub navigations: Vec<PostId>,
    pub should_quit: bool,
    screen: Rect,
}

impl PreviewApp {
    /// Build the preview from config. `popular` and `history` are the posts
    /// shown in each card.
    pub fn new(config: &Config, popular: Post, history: Post) -> Result<Self> {
        Ok(Self {
            popular,
            history,
            history_card: HistoryCard::new(),
            focus: Focus::Popular,
            strings: Strings::with_overrides(&config.strings)?,
            theme: Theme::from_variant(config.theme),
            assets: AssetCatalog::builtin(),
            card_size: config.popular_card.map(CardSize::from).unwrap_or_default(),
            navigations: Vec::new(),
            should_quit: false,
            screen: Rect::default(),
        })
    }

    pub fn areas(&self, screen: Rect) -> PreviewAreas {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(screen);
        let [popular, history] = Layout::horizontal([
            Constraint::Length(self.card_size.width + 2),
            Constraint::Min(1),
        ])
        .areas(body);
        let popular = Rect {
            x: popular.x + 1,
            y: popular.y + 1,
            width: popular.width.saturating_sub(2),
            height: popular.height.saturating_sub(1),
        };
        let history = Rect {
            y: history.y + 1,
            height: HISTORY_ROW_HEIGHT.min(history.height.saturating_sub(1)),
            ..history
        };
        PreviewAreas {
            popular,
            history,
            status,
        }
    }

    pub fn set_screen(&mut self, screen: Rect) {
        self.screen = screen;
    }

    fn popular_card(&self) -> PopularCard<'_> {
        PopularCard::new(&self.popular, &self.strings, &self.theme, &self.assets)
            .size(self.card_size)
    }

    fn dispatch_history(&mut self, intent: HistoryCardIntent) {
        let navigations = &mut self.navigations;
        self.history_card
            .dispatch(&self.history, intent, &mut |id: &PostId| navigations.push(id.clone()));
    }

    fn dispatch_popular(&mut self, intent: PopularCardIntent) {
        let mut navigated = Vec::new();
        self.popular_card()
            .dispatch(intent, &mut |id: &PostId| navigated.push(id.clone()));
        self.navigations.extend(navigated);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let dialog = self.history_card.dialog();
        if dialog.is_visible() {
            if let Some(intent) = history_key_intent(dialog, &key) {
                self.dispatch_history(intent);
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Popular => Focus::History,
                    Focus::History => Focus::Popular,
                };
            }
            // Assistive path: invoke the row's custom action by label.
            KeyCode::Char('a') if self.focus == Focus::History => {
                let label = self.strings.get(StringKey::ShowFewer).to_string();
                let navigations = &mut self.navigations;
                self.history_card.perform_custom_action(
                    &self.history,
                    &self.strings,
                    &label,
                    &mut |id: &PostId| navigations.push(id.clone()),
                );
            }
            _ => match self.focus {
                Focus::Popular => {
                    if let Some(intent) = popular_key_intent(&key) {
                        self.dispatch_popular(intent);
                    }
                }
                Focus::History => {
                    if let Some(intent) = history_key_intent(dialog, &key) {
                        self.dispatch_history(intent);
                    }
                }
            },
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let areas = self.areas(self.screen);
        let (column, row) = (mouse.column, mouse.row);

        let history_view =
            self.history_card
                .view(&self.history, &self.strings, &self.theme, &self.assets);
        let history_hit = history_view.hit_test(areas.history, self.screen, column, row);

        if self.history_card.dialog().is_visible() {
            if let Some(intent) = history_hit {
                self.dispatch_history(intent);
            }
            return;
        }

        if let Some(intent) = self.popular_card().hit_test(areas.popular, column, row) {
            self.focus = Focus::Popular;
            self.dispatch_popular(intent);
        } else if let Some(intent) = history_hit {
            self.focus = Focus::History;
            self.dispatch_history(intent);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let screen = frame.area();
        let areas = self.areas(screen);

        frame.render_widget(&self.popular_card(), areas.popular);

        let history_view =
            self.history_card
                .view(&self.history, &self.strings, &self.theme, &self.assets);
        frame.render_widget(&history_view, areas.history);

        frame.render_widget(self.status_line(), areas.status);
        history_view.render_dialog(screen, frame.buffer_mut());
    }

    fn status_line(&self) -> Paragraph<'static> {
        let hint = Style::default().add_modifier(Modifier::DIM);
        let focus = match self.focus {
            Focus::Popular => "popular",
            Focus::History => "history",
        };
        let last = self
            .navigations
            .last()
            .map(|id| format!("navigate({id})"))
            .unwrap_or_else(|| "no navigation".to_string());
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" [{focus}] "), self.theme.typography.button),
            Span::raw(last),
            Span::styled(
                "  │ tab focus · enter open · x dismiss · a show fewer · q quit",
                hint,
            ),
        ]))
    }
}

/// Run the preview until the user quits.
pub fn run(mut app: PreviewApp) -> anyhow::Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    tracing::info!("Preview started");

    while !app.should_quit {
        let size = terminal.size()?;
        app.set_screen(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| app.render(frame))?;

        match event::read()? {
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            _ => {}
        }
    }

    tracing::info!(navigations = app.navigations.len(), "Preview finished");
    Ok(())
}
