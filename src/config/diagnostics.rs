//! Where tolerated resolution failures get reported.

/// Receives diagnostic messages produced while resolving a schema.
pub trait DiagnosticSink {
    fn record(&self, message: &str);
}

/// Forwards diagnostics to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn record(&self, message: &str) {
        self(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_tracing_sink_emits_warning() {
        TracingSink.record("something is off");

        assert!(logs_contain("WARN"));
        assert!(logs_contain("something is off"));
    }

    #[test]
    fn test_closure_sink() {
        let seen = RefCell::new(Vec::new());
        let sink = |m: &str| seen.borrow_mut().push(m.to_string());

        sink.record("one");
        sink.record("two");

        assert_eq!(*seen.borrow(), ["one", "two"]);
    }
}
