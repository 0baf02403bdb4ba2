/// Why an error code could not be turned into a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The C runtime does not recognise the code.
    #[error("unknown error code {code}")]
    UnknownCode { code: i32 },

    /// The message did not fit in the largest buffer the resolver is allowed to use.
    #[error("message for error code {code} does not fit in {capacity} bytes")]
    BufferTooSmall { code: i32, capacity: usize },

    /// The C runtime returned some other failure status.
    #[error("lookup of error code {code} failed with status {status}")]
    Status { code: i32, status: i32 },
}

impl Error {
    /// The error code that was being looked up.
    pub fn code(&self) -> i32 {
        match *self {
            Error::UnknownCode { code }
            | Error::BufferTooSmall { code, .. }
            | Error::Status { code, .. } => code,
        }
    }

    /// The OS status describing the failure.
    pub fn status(&self) -> i32 {
        match *self {
            Error::UnknownCode { .. } => libc::EINVAL,
            Error::BufferTooSmall { .. } => libc::ERANGE,
            Error::Status { status, .. } => status,
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        Self::from_raw_os_error(e.status())
    }
}
