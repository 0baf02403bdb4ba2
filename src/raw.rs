//! Direct access to the C runtime's message lookup.

use crate::fill_impl;

/// What one call into the C runtime produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fill<'a> {
    /// The message, without its NUL terminator.
    ///
    /// May borrow the caller's buffer or static storage owned by the runtime.
    Message(&'a [u8]),
    /// The message and its terminator used every byte of the buffer.
    ///
    /// Runtimes that truncate silently report a cut-off message the same way, so the message is
    /// only trusted once the buffer cannot grow any further.
    Full(&'a [u8]),
    /// The buffer was too small to hold the whole message.
    Truncated,
    /// The runtime rejected the call with this status.
    Rejected(i32),
}

/// Name of the C function backing [`fill`] on this target.
pub fn mechanism() -> &'static str {
    fill_impl::MECHANISM
}

/// Ask the C runtime for the message of `code`, using `buf` as scratch space.
///
/// An empty buffer always yields [`Fill::Truncated`].
pub fn fill(code: i32, buf: &mut [u8]) -> Fill<'_> {
    if buf.is_empty() {
        return Fill::Truncated;
    }
    fill_impl::fill(code, buf)
}

/// The NUL-terminated prefix of `buf`, or `None` if there is no terminator.
#[cfg_attr(any(windows, target_env = "gnu"), allow(dead_code))]
pub(crate) fn terminated(buf: &[u8]) -> Option<&[u8]> {
    buf.iter().position(|&b| b == 0).map(|len| &buf[..len])
}

/// Interpret `buf` after a runtime call that truncates without reporting it.
#[cfg_attr(all(unix, not(target_env = "gnu")), allow(dead_code))]
pub(crate) fn silently_truncated(buf: &[u8]) -> Fill<'_> {
    match buf.iter().position(|&b| b == 0) {
        Some(len) if len + 1 < buf.len() => Fill::Message(&buf[..len]),
        Some(len) => Fill::Full(&buf[..len]),
        None => Fill::Truncated,
    }
}

/// Classify a non-zero status returned by a status-style runtime call.
#[cfg_attr(all(unix, target_env = "gnu"), allow(dead_code))]
pub(crate) fn classify(status: i32) -> Fill<'static> {
    if status == libc::ERANGE {
        Fill::Truncated
    } else {
        Fill::Rejected(status)
    }
}
