pub mod calculator;
pub mod clock;
pub mod config;
pub mod extract;
pub mod logic;
