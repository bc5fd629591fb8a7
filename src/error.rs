use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a shot number: {0:?}")]
    NotANumber(String),

    #[error("shot number {0} is not on the menu")]
    OutOfRange(i64),
}

impl Error {
    /// Bad shot selections only cost the turn; everything else is passed up.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NotANumber(_) | Error::OutOfRange(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
