// Reporting features
pub mod aggregate;
pub mod dashboard;
pub mod reporter;
