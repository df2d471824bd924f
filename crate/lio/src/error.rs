use {
    std::io,
    thiserror::Error,
};

/// Failures the copy helpers raise on their own.
///
/// They travel inside an [`io::Error`] of the matching kind; get them back
/// with [`StreamError::from_io`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("destination holds {len} items, {min} requested")]
    ShortBuffer { min: usize, len: usize },

    #[error("source ended after {read} of {expected} items")]
    UnexpectedEnd { read: u64, expected: u64 },

    #[error("sink stopped accepting with {pending} items pending")]
    SinkStalled { pending: usize },
}

impl StreamError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::ShortBuffer { .. } => io::ErrorKind::InvalidInput,
            Self::UnexpectedEnd { .. } => io::ErrorKind::UnexpectedEof,
            Self::SinkStalled { .. } => io::ErrorKind::WriteZero,
        }
    }

    pub fn from_io(err: &io::Error) -> Option<&Self> {
        err.get_ref()?.downcast_ref()
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
