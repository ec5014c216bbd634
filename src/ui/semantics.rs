//! Accessibility tree exposed by the cards.
//!
//! Each card describes itself as a tree of [`SemanticsNode`]s. Screen
//! readers walk [`SemanticsNode::traversal`] and trigger actions by click or
//! by custom action label. Actions are the card's own intent type, so
//! performing one is a plain dispatch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Image,
    Text,
    Dialog,
}

/// Named alternative activation path announced by assistive technology.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAction<A> {
    pub label: String,
    pub action: A,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemanticsNode<A> {
    pub role: Option<Role>,
    /// Spoken content (text or content description).
    pub label: Option<String>,
    /// Announced verb for the primary action, e.g. "read article".
    pub click_label: Option<String>,
    pub on_click: Option<A>,
    pub custom_actions: Vec<CustomAction<A>>,
    /// Cleared nodes and their subtrees are skipped during traversal.
    pub cleared: bool,
    pub children: Vec<SemanticsNode<A>>,
}

impl<A> Default for SemanticsNode<A> {
    fn default() -> Self {
        Self {
            role: None,
            label: None,
            click_label: None,
            on_click: None,
            custom_actions: Vec::new(),
            cleared: false,
            children: Vec::new(),
        }
    }
}

impl<A> SemanticsNode<A> {
    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(Role::Text).label(label)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_click(mut self, click_label: impl Into<String>, action: A) -> Self {
        self.click_label = Some(click_label.into());
        self.on_click = Some(action);
        self
    }

    pub fn custom_action(mut self, label: impl Into<String>, action: A) -> Self {
        self.custom_actions.push(CustomAction {
            label: label.into(),
            action,
        });
        self
    }

    /// Drop this node from traversal and from action lookup.
    pub fn clear_semantics(mut self) -> Self {
        self.cleared = true;
        self
    }

    pub fn child(mut self, child: SemanticsNode<A>) -> Self {
        self.children.push(child);
        self
    }

    /// Pre-order walk over every node that is not cleared.
    pub fn traversal(&self) -> Vec<&SemanticsNode<A>> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a SemanticsNode<A>>) {
        if self.cleared {
            return;
        }
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    /// Nodes a sequential (swipe/tab) navigation stops on.
    pub fn focus_order(&self) -> Vec<&SemanticsNode<A>> {
        self.traversal()
            .into_iter()
            .filter(|node| node.on_click.is_some())
            .collect()
    }

    /// Find a reachable custom action by its announced label.
    pub fn find_custom_action(&self, label: &str) -> Option<&A> {
        self.traversal().into_iter().find_map(|node| {
            node.custom_actions
                .iter()
                .find(|custom| custom.label == label)
                .map(|custom| &custom.action)
        })
    }
}
