pub mod time_ops;
pub mod warning_limiter;
