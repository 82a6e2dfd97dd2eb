use tracing::Level;

/// Install the stderr subscriber. Stdout carries only the report.
///
/// Verbosity: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
