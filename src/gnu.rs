use crate::raw::{silently_truncated, Fill};
use libc::{c_char, c_int, size_t};
use std::ffi::CStr;

pub(crate) const MECHANISM: &str = "strerror_r";

extern "C" {
    // libc links `strerror_r` to the XSI `__xpg_strerror_r` on glibc; this is the GNU one.
    #[link_name = "strerror_r"]
    fn gnu_strerror_r(errnum: c_int, buf: *mut c_char, buflen: size_t) -> *mut c_char;
}

pub(crate) fn fill(code: i32, buf: &mut [u8]) -> Fill<'_> {
    // Safety: buf is valid for writes of buf.len() bytes
    let msg = unsafe { gnu_strerror_r(code, buf.as_mut_ptr() as *mut c_char, buf.len()) };
    // Safety: glibc returns null, a pointer into buf, or a string that lives for the whole program
    unsafe { interpret(msg, buf) }
}

// Safety: `msg` must be null, point into `buf`, or point to a NUL-terminated 'static string.
unsafe fn interpret(msg: *const c_char, buf: &[u8]) -> Fill<'_> {
    if msg.is_null() {
        Fill::Rejected(libc::EINVAL)
    } else if msg as *const u8 == buf.as_ptr() {
        silently_truncated(buf)
    } else {
        Fill::Message(CStr::from_ptr(msg).to_bytes())
    }
}
