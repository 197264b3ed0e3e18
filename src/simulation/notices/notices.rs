use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Short-lived status message for the UI. Never affects the simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub ticks_remaining: u32,
}

impl Notice {
    pub fn error(message: &str, ticks: u32) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
            ticks_remaining: ticks,
        }
    }

    pub fn success(message: &str, ticks: u32) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
            ticks_remaining: ticks,
        }
    }

    /// Count down one tick. Returns false once expired.
    pub(super) fn tick(&mut self) -> bool {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        self.ticks_remaining > 0
    }
}
