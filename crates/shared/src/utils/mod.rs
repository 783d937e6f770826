mod gracefull;
mod logs;
mod parse_datetime;
mod time_window;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::parse_datetime::parse_date_input;
pub use self::time_window::{TimeWindow, current_month, day_window, previous_month};
