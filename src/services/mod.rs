pub mod notifications;

pub use notifications::{process_notification, NotificationOutcome, ProcessingError};
