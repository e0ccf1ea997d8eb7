use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("I/O failure on the judge pipe")]
    Io(#[from] io::Error),

    #[error("Input ended before `{field}` was read")]
    Truncated { field: &'static str },

    #[error("Invalid `{field}`: {token:?}")]
    Malformed { field: &'static str, token: String },
}
