//! Keyboard bindings for the cards.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::history_card::{DialogState, HistoryCardIntent};
use crate::ui::popular_card::PopularCardIntent;

pub fn history_key_intent(dialog: DialogState, key: &KeyEvent) -> Option<HistoryCardIntent> {
    match (dialog, key.code) {
        (DialogState::Shown, KeyCode::Enter) => Some(HistoryCardIntent::Confirm),
        (DialogState::Shown, KeyCode::Esc) => Some(HistoryCardIntent::DismissRequest),
        (DialogState::Shown, _) => None,
        (DialogState::Hidden, KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(HistoryCardIntent::ActivateRow)
        }
        (DialogState::Hidden, KeyCode::Char('x') | KeyCode::Delete) => {
            Some(HistoryCardIntent::Dismiss)
        }
        (DialogState::Hidden, _) => None,
    }
}

pub fn popular_key_intent(key: &KeyEvent) -> Option<PopularCardIntent> {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')).then_some(PopularCardIntent::Activate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dialog_captures_enter() {
        assert_eq!(
            history_key_intent(DialogState::Shown, &key(KeyCode::Enter)),
            Some(HistoryCardIntent::Confirm)
        );
        assert_eq!(
            history_key_intent(DialogState::Hidden, &key(KeyCode::Enter)),
            Some(HistoryCardIntent::ActivateRow)
        );
    }

    #[test]
    fn dismiss_key_ignored_while_shown() {
        assert_eq!(history_key_intent(DialogState::Shown, &key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn popular_ignores_other_keys() {
        assert_eq!(popular_key_intent(&key(KeyCode::Char('x'))), None);
    }
}
