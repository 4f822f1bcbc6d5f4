pub mod break_interval;
pub mod break_list;
pub mod calculation;
pub mod time_of_day;
