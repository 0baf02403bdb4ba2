//! Resolving error codes to owned message strings.

use crate::raw::{self, Fill};
use crate::Error;
use once_cell::race::OnceBox;
use std::num::NonZeroUsize;

const DEFAULT_INITIAL_CAPACITY: usize = 256;
const DEFAULT_MAX_CAPACITY: usize = 64 * 1024;

/// Something that can describe an error code.
pub trait Resolve {
    /// Name of the underlying lookup, used in diagnostics.
    fn mechanism(&self) -> &'static str;

    /// Get the human-readable message for `code`.
    fn resolve(&self, code: i32) -> Result<String, Error>;
}

/// Options for building a [`PlatformResolver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolverOptions {
    initial_capacity: NonZeroUsize,
    max_capacity: NonZeroUsize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverOptions {
    /// Start with a 256 byte buffer that may grow up to 64 KiB.
    pub fn new() -> Self {
        Self {
            initial_capacity: NonZeroUsize::new(DEFAULT_INITIAL_CAPACITY).unwrap(),
            max_capacity: NonZeroUsize::new(DEFAULT_MAX_CAPACITY).unwrap(),
        }
    }

    /// Size of the first buffer handed to the C runtime.
    pub fn initial_capacity(&mut self, capacity: NonZeroUsize) -> &mut Self {
        self.initial_capacity = capacity;
        self
    }

    /// Largest buffer the resolver will grow to before giving up.
    pub fn max_capacity(&mut self, capacity: NonZeroUsize) -> &mut Self {
        self.max_capacity = capacity;
        self
    }

    /// Build the resolver.
    ///
    /// The initial capacity is clamped to the maximum.
    pub fn finish(&self) -> PlatformResolver {
        PlatformResolver {
            initial_capacity: self.initial_capacity.min(self.max_capacity),
            max_capacity: self.max_capacity,
        }
    }
}

/// Resolves codes through the C runtime of the current target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlatformResolver {
    initial_capacity: NonZeroUsize,
    max_capacity: NonZeroUsize,
}

impl Default for PlatformResolver {
    fn default() -> Self {
        ResolverOptions::new().finish()
    }
}

impl PlatformResolver {
    /// Size of the first buffer handed to the C runtime.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity.get()
    }

    /// Largest buffer this resolver will use.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity.get()
    }

    fn resolve_with<F>(&self, code: i32, mut fill: F) -> Result<String, Error>
    where
        F: for<'a> FnMut(i32, &'a mut [u8]) -> Fill<'a>,
    {
        let max = self.max_capacity.get();
        let mut capacity = self.initial_capacity.get();
        loop {
            let mut buf = vec![0u8; capacity];
            match fill(code, &mut buf) {
                Fill::Message(bytes) => {
                    let message = String::from_utf8_lossy(bytes).into_owned();
                    tracing::trace!(code, capacity, "resolved error message");
                    return Ok(message);
                }
                Fill::Full(_) | Fill::Truncated if capacity < max => {
                    capacity = capacity.saturating_mul(2).min(max);
                    tracing::debug!(code, capacity, "message truncated, growing buffer");
                }
                // Nothing larger to try, so a message that reached the last byte is accepted
                Fill::Full(bytes) => {
                    let message = String::from_utf8_lossy(bytes).into_owned();
                    tracing::trace!(code, capacity, "resolved error message at capacity");
                    return Ok(message);
                }
                Fill::Truncated => return Err(Error::BufferTooSmall { code, capacity }),
                Fill::Rejected(status) if status == libc::EINVAL => {
                    return Err(Error::UnknownCode { code })
                }
                Fill::Rejected(status) => return Err(Error::Status { code, status }),
            }
        }
    }
}

impl Resolve for PlatformResolver {
    fn mechanism(&self) -> &'static str {
        raw::mechanism()
    }

    fn resolve(&self, code: i32) -> Result<String, Error> {
        self.resolve_with(code, raw::fill)
    }
}

/// The process-wide resolver with default options.
pub fn resolver() -> &'static PlatformResolver {
    static RESOLVER: OnceBox<PlatformResolver> = OnceBox::new();
    RESOLVER.get_or_init(|| Box::new(PlatformResolver::default()))
}

/// Get the message for `code` using the default resolver.
pub fn describe(code: i32) -> Result<String, Error> {
    resolver().resolve(code)
}
