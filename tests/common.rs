#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkhours::models::break_interval::BreakInterval;
use rworkhours::models::time_of_day::TimeOfDay;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path
pub fn temp_text(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.txt", name));
    fs::write(&path, content).expect("write temp text");
    path.to_string_lossy().to_string()
}

pub fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).expect("valid HH:MM")
}

pub fn brk(id: u32, start: &str, end: &str) -> BreakInterval {
    BreakInterval::new(id, Some(t(start)), Some(t(end)))
}
