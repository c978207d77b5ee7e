// Data models
pub mod record;
pub mod stats;
