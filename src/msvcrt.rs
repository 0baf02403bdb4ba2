use crate::raw::{classify, silently_truncated, Fill};
use libc::{c_char, c_int, size_t};

pub(crate) const MECHANISM: &str = "strerror_s";

extern "C" {
    fn strerror_s(buffer: *mut c_char, size_in_bytes: size_t, errnum: c_int) -> c_int;
}

pub(crate) fn fill(code: i32, buf: &mut [u8]) -> Fill<'_> {
    // Safety: buf is valid for writes of buf.len() bytes, and is never empty
    let rc = unsafe { strerror_s(buf.as_mut_ptr() as *mut c_char, buf.len(), code) };
    match rc {
        // strerror_s truncates silently, so a full buffer means the message may be cut short
        0 => silently_truncated(buf),
        status => classify(status),
    }
}
