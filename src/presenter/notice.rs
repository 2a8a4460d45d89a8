//! Transient messages shown in the footer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    remaining_ticks: u16,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>, ticks: u16) -> Self {
        Self {
            level,
            message: message.into(),
            remaining_ticks: ticks,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Count down one tick. Returns false once the notice has expired.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}
