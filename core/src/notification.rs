pub const NOTIFICATION_AUTO_DISMISS_MS: u32 = 5_000;
pub const NOTIFICATION_SLIDE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#007aff",
            Severity::Success => "#30d158",
            Severity::Error => "#ff3b30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    pub phase: NoticePhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOutcome {
    pub id: NoticeId,
    pub replaced: Option<NoticeId>,
}

/// Bookkeeping for the single on-screen notification.
///
/// A notice goes `Shown -> Leaving -> removed`. Calls naming a notice that was
/// replaced, or that already moved past the requested phase, return `false`
/// so timers that fire late do nothing.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ShowOutcome {
        self.next_id = self.next_id.saturating_add(1);
        let id = NoticeId(self.next_id);
        let replaced = self.current.take().map(|notice| notice.id);
        self.current = Some(Notice {
            id,
            message: message.into(),
            severity,
            phase: NoticePhase::Shown,
        });
        ShowOutcome { id, replaced }
    }

    /// Starts the slide-out. Returns `true` only on the first request for the live notice.
    pub fn begin_dismiss(&mut self, id: NoticeId) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id && notice.phase == NoticePhase::Shown => {
                notice.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn finish_removal(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_live(&self, id: NoticeId) -> bool {
        self.current.as_ref().is_some_and(|notice| notice.id == id)
    }
}

pub const SLIDE_IN_TRANSFORM: &str = "translateX(0)";
pub const SLIDE_OUT_TRANSFORM: &str = "translateX(400px)";
