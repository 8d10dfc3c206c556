use thiserror::Error;

use crate::cancel::CancelReason;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn no_byte_order_mark() -> Error {
        Error(ErrorKind::NoByteOrderMark.into())
    }

    pub fn unexpected_eos(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnexpectedEndOfStream {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn malformed(offset: u64, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::MalformedSequence {
                offset,
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn cancelled(reason: CancelReason) -> Error {
        Error(ErrorKind::Cancelled { reason }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Returns `true` if the conversion was stopped by a cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind(), ErrorKind::Cancelled { .. })
    }

    /// Returns `true` if no recognized UTF-16 byte-order mark was found (or none
    /// was supplied for writing).
    pub fn is_no_byte_order_mark(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoByteOrderMark)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("no UTF-16 byte-order mark found")]
    NoByteOrderMark,

    #[error("unexpected end of stream while reading {context}")]
    UnexpectedEndOfStream { context: String },

    #[error("malformed sequence at byte offset {offset}: {message}")]
    MalformedSequence { offset: u64, message: String },

    #[error("conversion cancelled: {reason}")]
    Cancelled { reason: CancelReason },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
