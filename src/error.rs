use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CraqueError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CraqueError>;
