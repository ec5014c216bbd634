pub mod assets;
pub mod components;
pub mod history_card;
pub mod input;
pub mod layout;
pub mod popular_card;
pub mod preview;
pub mod semantics;
pub mod terminal_guard;
pub mod text;
pub mod theme;

pub use ::mvi;
