//! Transient toast notices shown in the page corner.
//!
//! Components report outcomes as [`Notice`] values; the host layer owns the
//! element and the timers that animate it.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays on screen before it starts leaving.
pub const NOTICE_VISIBLE_MS: u32 = 3000;

/// Duration of the slide-out animation, after which the element is removed.
pub const NOTICE_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    /// Background color of the toast.
    #[must_use]
    pub fn background(&self) -> &'static str {
        match self.kind {
            NoticeKind::Error => "#c94040",
            NoticeKind::Success => "#34a853",
        }
    }
}
