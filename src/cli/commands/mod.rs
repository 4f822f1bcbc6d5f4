pub mod breaks;
pub mod config;
pub mod init;
pub mod output;
pub mod scan;
pub mod simple;
