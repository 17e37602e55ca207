use std::io::Write;

/// Text output collaborator
///
/// Used once, when setup finds the transport capability missing. Whatever
/// renders the text (a terminal, a status bar, a test recorder) lives
/// behind this trait.
pub trait OutputSink: Send + Sync {
    /// Render a human-readable line of text
    fn output(&self, text: &str);
}

/// Writes output lines to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl OutputSink for StderrSink {
    fn output(&self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", text);
    }
}

impl<F> OutputSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn output(&self, text: &str) {
        self(text)
    }
}
