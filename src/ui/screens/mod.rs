pub mod fixtures;

pub use fixtures::draw_fixtures;
