use crate::ui::history_card::intent::HistoryCardIntent;
use crate::ui::history_card::state::DialogState;
use crate::ui::mvi::Reducer;

pub struct HistoryCardReducer;

impl Reducer for HistoryCardReducer {
    type State = DialogState;
    type Intent = HistoryCardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HistoryCardIntent::Dismiss | HistoryCardIntent::ShowFewer => DialogState::Shown,
            HistoryCardIntent::Confirm | HistoryCardIntent::DismissRequest => DialogState::Hidden,
            // Navigation is an effect, not a state change.
            HistoryCardIntent::ActivateRow => state,
        }
    }
}
