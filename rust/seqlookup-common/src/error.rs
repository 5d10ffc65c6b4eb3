use thiserror::Error;

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

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn task_failed(index: usize, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::TaskFailed {
                index,
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error reports a faulted batch task.
    pub fn is_task_failure(&self) -> bool {
        matches!(self.kind(), ErrorKind::TaskFailed { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("task #{index} failed: {message}")]
    TaskFailed { index: usize, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
