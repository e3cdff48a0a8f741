use std::cell::RefCell;

/// Failure to show a notification to the user
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("notification interrupted")]
    Interrupted,
}

/// Shows error popups to the user
pub trait Notifier {
    fn error(&self, message: &str) -> Result<(), NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn error(&self, message: &str) -> Result<(), NotifyError> {
        (**self).error(message)
    }
}

/// Drops every message. For headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn error(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Keeps every message it is asked to show
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.error("Invalid name").unwrap();
        (&notifier).error("Invalid address").unwrap();
        assert_eq!(notifier.messages(), vec!["Invalid name", "Invalid address"]);
    }
}
