pub mod intervals;
pub mod minutes;
pub mod progress;
pub mod projection;
