pub mod http_notifier;
pub mod log_notifier;

pub use http_notifier::HttpMailNotifier;
pub use log_notifier::LogNotifier;
