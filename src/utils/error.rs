use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FuelError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FuelError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;
