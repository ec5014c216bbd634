//! Row summarizing a previously viewed post, with a "show fewer" dismiss
//! control guarded by a confirmation dialog.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::HistoryCardIntent;
pub use reducer::HistoryCardReducer;
pub use state::DialogState;
pub use view::{
    HistoryCardLayout, HistoryCardView, DISMISS_GLYPH, DISMISS_TARGET, HISTORY_ROW_HEIGHT,
};

use crate::model::{Post, PostId};
use crate::strings::{StringKey, Strings};
use crate::ui::assets::ImageAssets;
use crate::ui::mvi::Store;
use crate::ui::semantics::{Role, SemanticsNode};
use crate::ui::theme::Theme;

/// One on-screen history card instance. Owns only the dialog flag.
#[derive(Debug, Clone, Default)]
pub struct HistoryCard {
    store: Store<DialogState>,
}

impl HistoryCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> DialogState {
        *self.store.state()
    }

    /// Apply `intent`. Row activation calls `navigate` unless the dialog is
    /// shown, in which case the modal swallows it.
    pub fn dispatch<F>(&mut self, post: &Post, intent: HistoryCardIntent, navigate: &mut F)
    where
        F: FnMut(&PostId),
    {
        let before = self.dialog();
        if intent == HistoryCardIntent::ActivateRow && !before.is_visible() {
            tracing::debug!(post = %post.id, "History card navigate");
            navigate(&post.id);
        }

        let after = *self.store.dispatch::<HistoryCardReducer>(intent);
        if before != after {
            tracing::debug!(post = %post.id, ?intent, from = ?before, to = ?after, "Dialog transition");
        }
    }

    /// Perform a custom accessibility action by its announced label.
    ///
    /// Returns false when no reachable action carries that label.
    pub fn perform_custom_action<F>(
        &mut self,
        post: &Post,
        strings: &Strings,
        label: &str,
        navigate: &mut F,
    ) -> bool
    where
        F: FnMut(&PostId),
    {
        let Some(intent) = self.semantics(post, strings).find_custom_action(label).copied() else {
            return false;
        };
        self.dispatch(post, intent, navigate);
        true
    }

    pub fn view<'a>(
        &self,
        post: &'a Post,
        strings: &'a Strings,
        theme: &'a Theme,
        assets: &'a dyn ImageAssets,
    ) -> HistoryCardView<'a> {
        HistoryCardView {
            post,
            strings,
            theme,
            assets,
            dialog: self.dialog(),
        }
    }

    /// Accessibility tree. While the dialog is shown only the dialog is
    /// reachable.
    pub fn semantics(&self, post: &Post, strings: &Strings) -> SemanticsNode<HistoryCardIntent> {
        if self.dialog().is_visible() {
            return SemanticsNode::new(Role::Dialog)
                .child(SemanticsNode::text(strings.get(StringKey::FewerStories)))
                .child(SemanticsNode::text(strings.get(StringKey::FewerStoriesContent)))
                .child(
                    SemanticsNode::new(Role::Button)
                        .label(strings.get(StringKey::Agree))
                        .on_click(strings.get(StringKey::Agree), HistoryCardIntent::Confirm),
                );
        }

        let show_fewer = strings.get(StringKey::ShowFewer);
        let metadata = &post.metadata;
        SemanticsNode::new(Role::Button)
            .on_click(
                strings.get(StringKey::ReadArticle),
                HistoryCardIntent::ActivateRow,
            )
            .custom_action(show_fewer, HistoryCardIntent::ShowFewer)
            .child(SemanticsNode::text(post.title.as_str()))
            .child(SemanticsNode::text(metadata.author.name.as_str()))
            .child(SemanticsNode::text(format!(
                " - {} min read",
                metadata.read_time_minutes
            )))
            .child(
                SemanticsNode::new(Role::Button)
                    .label(show_fewer)
                    .on_click(show_fewer, HistoryCardIntent::Dismiss)
                    .clear_semantics(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::samples;

    #[test]
    fn new_card_starts_hidden() {
        assert_eq!(HistoryCard::new().dialog(), DialogState::Hidden);
    }

    #[test]
    fn activate_while_shown_is_swallowed() {
        let post = samples::history();
        let mut card = HistoryCard::new();
        let mut calls = 0;
        let mut navigate = |_: &PostId| calls += 1;
        card.dispatch(&post, HistoryCardIntent::Dismiss, &mut navigate);
        card.dispatch(&post, HistoryCardIntent::ActivateRow, &mut navigate);
        assert_eq!(calls, 0);
        assert!(card.dialog().is_visible());
    }
}
