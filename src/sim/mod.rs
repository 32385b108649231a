pub mod engine;
/// Summary totals over a completed run.
pub mod summary;
pub mod types;
