pub mod cli;
pub mod display_verdict;
pub mod run;
pub mod run_bulk_verify;
pub mod run_export_results;
pub mod run_load_file;
pub mod run_single_verify;
pub mod show_run_stats;
