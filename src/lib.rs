pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod simulation;
pub mod storage;
#[cfg(test)]
pub mod test_helpers;
pub mod trading;
