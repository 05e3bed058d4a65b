pub mod text;
pub mod time;

pub use text::truncate_to_width;
pub use time::{format_kickoff, format_wall_clock, human_timestamp, local_today, parse_match_time};
