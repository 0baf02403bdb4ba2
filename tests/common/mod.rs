//! Shared helpers for the integration tests.

use errno_message::{Error, Resolve};

/// Initialize tracing for tests (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

/// A resolver that always answers with the same result.
pub struct FixedResolver(pub Result<&'static str, Error>);

impl Resolve for FixedResolver {
    fn mechanism(&self) -> &'static str {
        "fixed_lookup"
    }

    fn resolve(&self, _code: i32) -> Result<String, Error> {
        self.0.map(str::to_owned)
    }
}
