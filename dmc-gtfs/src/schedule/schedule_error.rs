#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("failure reading schedule file {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("error due to dataset contents: {0}")]
    InvalidData(String),
}
