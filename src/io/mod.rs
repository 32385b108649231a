/// CSV export of flow records.
pub mod export;
/// CSV series import and resampling.
pub mod import;
