//! Output routing of `report` with both real and stand-in resolvers.

mod common;

use common::*;
use errno_message::{report, resolver, Error, Outcome, PlatformResolver, SAMPLE_CODE};

fn run(resolver: &dyn errno_message::Resolve, code: i32) -> (Outcome, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = report(resolver, code, &mut out, &mut err).expect("writing to a Vec failed");
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn success_goes_to_stdout() {
    init_tracing();

    let (outcome, out, err) = run(&FixedResolver(Ok("stub message")), 7);
    assert_eq!(outcome, Outcome::Described("stub message".to_owned()));
    assert_eq!(out, "Error 7: stub message\n");
    assert!(err.is_empty());
}

#[test]
fn failure_goes_to_stderr_only() {
    init_tracing();

    let (outcome, out, err) = run(&FixedResolver(Err(Error::UnknownCode { code: 9 })), 9);
    assert_eq!(outcome, Outcome::Failed(Error::UnknownCode { code: 9 }));
    assert!(out.is_empty(), "partial output: {:?}", out);
    assert_eq!(err, "fixed_lookup failed: unknown error code 9\n");
}

#[test]
fn buffer_too_small_is_diagnosed() {
    init_tracing();

    let e = Error::BufferTooSmall {
        code: SAMPLE_CODE,
        capacity: 64,
    };
    let (outcome, out, err) = run(&FixedResolver(Err(e)), SAMPLE_CODE);
    assert_eq!(outcome, Outcome::Failed(e));
    assert!(out.is_empty());
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("does not fit in 64 bytes"));
}

#[test]
fn sample_code_is_described() {
    init_tracing();

    let (outcome, out, err) = run(resolver(), SAMPLE_CODE);
    let message = match outcome {
        Outcome::Described(message) => message,
        Outcome::Failed(e) => panic!("sample code not recognised: {}", e),
    };
    assert!(!message.trim().is_empty());
    assert_eq!(out, format!("Error {}: {}\n", SAMPLE_CODE, message));
    assert!(err.is_empty());
}

#[test]
fn mechanism_matches_target() {
    let name = errno_message::Resolve::mechanism(&PlatformResolver::default());
    if cfg!(windows) {
        assert_eq!(name, "strerror_s");
    } else {
        assert_eq!(name, "strerror_r");
    }
}
