use dmc_core::model::ModeChoiceError;

#[derive(thiserror::Error, Debug)]
pub enum DmcAppError {
    #[error("{0}")]
    InvalidUserInput(String),
    #[error("failure reading '{path}': {message}")]
    ReadError { path: String, message: String },
    #[error("failure writing '{path}': {message}")]
    WriteError { path: String, message: String },
    #[error(transparent)]
    ModeChoice(#[from] ModeChoiceError),
    #[error("{0}")]
    InternalError(String),
}
