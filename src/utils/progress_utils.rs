use indicatif::ProgressStyle;
use tracing::{info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} {msg}";

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

/// A span that renders as a progress bar while entered. Without an
/// indicatif layer installed (tests, library use) it is a plain span.
pub fn progress_span(len: u64, msg: &str) -> Span {
    let span = info_span!("progress", len);
    span.pb_set_style(&progress_style());
    span.pb_set_length(len);
    span.pb_set_message(msg);

    span
}
