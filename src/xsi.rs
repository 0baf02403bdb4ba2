use crate::raw::{classify, terminated, Fill};
use libc::{c_char, c_int};

pub(crate) const MECHANISM: &str = "strerror_r";

fn errno() -> i32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .unwrap_or(libc::EINVAL)
}

pub(crate) fn fill(code: i32, buf: &mut [u8]) -> Fill<'_> {
    // Safety: buf is valid for writes of buf.len() bytes
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr() as *mut c_char, buf.len()) };
    interpret(rc, buf, errno)
}

fn interpret(rc: c_int, buf: &[u8], errno: impl FnOnce() -> i32) -> Fill<'_> {
    match rc {
        // Truncation is reported through ERANGE, so success means the message is complete
        0 => terminated(buf).map_or(Fill::Truncated, Fill::Message),
        // Older runtimes report failure through errno
        -1 => classify(errno()),
        status => classify(status),
    }
}
