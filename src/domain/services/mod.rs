pub mod notifications;
pub mod pricing;
pub mod quotes;
pub mod triage;
