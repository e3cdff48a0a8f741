use aims_core::{Notifier, NotifyError};
use std::io::{self, Write};

/// Shows error popups as lines on stderr
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) -> Result<(), NotifyError> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "[error] {}", message)?;
        stderr.flush()?;
        Ok(())
    }
}
