pub mod error_alerts;
pub mod footer;
pub mod header;
