use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCardIntent {
    /// Primary action on the row: open the article.
    ActivateRow,
    /// The dismiss icon was clicked.
    Dismiss,
    /// The row's "show fewer" custom accessibility action.
    ShowFewer,
    /// The dialog's acknowledgement control.
    Confirm,
    /// Click outside the dialog or Esc.
    DismissRequest,
}

impl Intent for HistoryCardIntent {}
