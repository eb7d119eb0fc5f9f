pub mod report;
pub mod services;
