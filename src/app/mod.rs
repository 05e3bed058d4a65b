pub mod bootstrap;
pub mod controller;
pub mod events;
pub mod export;
pub mod headless;
pub mod loader;
pub mod scheduler;
pub mod state;

pub use bootstrap::run;
pub use controller::AppController;
pub use events::{AppEvent, Command, UserAction};
pub use state::{AppState, ListingStatus};
