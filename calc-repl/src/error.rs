use ariadne::Source;
use calc_error::Error;

/// Report the error to stderr, highlighting the parts of `input` that the error's spans point
/// to.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
pub fn report_to_stderr(err: &Error, input: &str) {
    if let Err(io_err) = err.build_report("input").eprint(("input", Source::from(input))) {
        // stderr is unavailable
        log::error!("failed to print error `{}`: {}", err, io_err);
    }
}
