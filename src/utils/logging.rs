use std::io::IsTerminal;

use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: an env filter at `level` and a fmt
/// layer on stderr, routed through indicatif so log lines and progress
/// bars do not overwrite each other.
pub fn init_tracing(level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(indicatif_layer.get_stderr_writer())
        )
        .with(indicatif_layer)
        .try_init();
}
