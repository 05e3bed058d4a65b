pub mod layout;
pub mod terminal;

pub use layout::{footer_columns, popup_area, ScreenAreas};
pub use terminal::{FixturesTerminal, TerminalGuard};
