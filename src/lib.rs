//! Human-readable messages for OS error codes, using whichever reentrant `strerror` variant the
//! target's C runtime provides.
#![cfg(any(unix, windows))]

#[cfg_attr(windows, path = "msvcrt.rs")]
#[cfg_attr(all(unix, target_env = "gnu"), path = "gnu.rs")]
#[cfg_attr(all(unix, not(target_env = "gnu")), path = "xsi.rs")]
pub(crate) mod fill_impl;

mod error;
pub use error::Error;

pub mod raw;
pub mod report;
pub mod resolver;

pub use report::{report, Outcome, SAMPLE_CODE};
pub use resolver::{describe, resolver, PlatformResolver, Resolve, ResolverOptions};
