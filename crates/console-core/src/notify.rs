//! Notification Surface
//!
//! Process-wide queue of transient toasts. Every component that completes
//! an asynchronous operation posts here; the UI renders and expires them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "toast toast-success",
            Severity::Info => "toast toast-info",
            Severity::Warning => "toast toast-warning",
            Severity::Error => "toast toast-error",
        }
    }
}

/// A message waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { severity: Severity::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { severity: Severity::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { severity: Severity::Error, text: text.into() }
    }
}

/// A posted notice with its identity and lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    next_id: u64,
    duration_ms: u32,
    active: Vec<Toast>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(3000)
    }
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self { next_id: 1, duration_ms, active: Vec::new() }
    }

    /// Queue a notice; returns the id used to dismiss it
    pub fn post(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("[TOAST] {:?}: {}", notice.severity, notice.text);
        self.active.push(Toast {
            id,
            severity: notice.severity,
            text: notice.text,
            duration_ms: self.duration_ms,
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.post(Notice::success(text))
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.post(Notice::error(text))
    }

    /// Remove a toast (timer expiry or close click); false if already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.id != id);
        self.active.len() != before
    }

    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    pub fn last(&self) -> Option<&Toast> {
        self.active.last()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_dismiss() {
        let mut notifier = Notifier::new(1500);
        let a = notifier.success("Restaurant created successfully!");
        let b = notifier.error("Failed to load restaurants");
        assert_ne!(a, b);
        assert_eq!(notifier.active().len(), 2);
        assert_eq!(notifier.active()[0].duration_ms, 1500);

        assert!(notifier.dismiss(a));
        assert!(!notifier.dismiss(a));
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }
}
