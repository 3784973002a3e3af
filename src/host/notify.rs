use colored::Colorize;

/// Icon shown next to a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Modal message boxes.
pub trait Notifier {
    fn message_box(&self, title: &str, message: &str, severity: Severity);
}

/// Prints message boxes to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn message_box(&self, title: &str, message: &str, severity: Severity) {
        let label = match severity {
            Severity::Info => "info:".bold().cyan(),
            Severity::Warning => "warning:".bold().yellow(),
            Severity::Error => "error:".bold().red(),
        };
        eprintln!("{} {} {}", label, format!("[{}]", title).bold(), message);
    }
}

/// Keeps every message for inspection.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: std::cell::RefCell<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<Notification> {
        self.messages.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn message_box(&self, title: &str, message: &str, severity: Severity) {
        self.messages.borrow_mut().push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        });
    }
}
