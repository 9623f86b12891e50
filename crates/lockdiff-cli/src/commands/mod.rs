pub mod diff;
pub mod report;
