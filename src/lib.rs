pub mod report;
pub mod runner;
pub mod utils;

// Re-export common items
pub use report::write_reports;
pub use runner::run_smoke_test;
pub use utils::config::RunConfig;
