pub mod components;
pub mod keymap;
pub mod screens;
pub mod styles;

pub use components::TerminalGuard;
pub use keymap::action_for;
pub use screens::draw_fixtures;
