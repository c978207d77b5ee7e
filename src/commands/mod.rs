// Output commands
pub mod report;
