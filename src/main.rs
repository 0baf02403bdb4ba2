use errno_message::{report, resolver, SAMPLE_CODE};
use std::io;

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = report(
        resolver(),
        SAMPLE_CODE,
        &mut stdout.lock(),
        &mut stderr.lock(),
    ) {
        tracing::error!("failed to write report: {}", e);
    }
}
