use crate::ui::mvi::UiState;

/// Visibility of the "show fewer" confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown,
}

impl UiState for DialogState {}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown)
    }
}
