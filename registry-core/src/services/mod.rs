//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod logging;
pub mod report;
mod user;

pub use logging::{LogEntry, LogEvent, LoggingService};
pub use report::ReportLocale;
pub use user::UserService;
