use crate::contact::Severity;
use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const AUTO_HIDE: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    shown_at: Instant,
}

/// At most one transient notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn show(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            severity,
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The visible notice at `now`, if it has not timed out
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|notice| now.saturating_duration_since(notice.shown_at) < AUTO_HIDE)
    }

    /// Drop a timed-out notice. Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_visible_until_timeout() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        board.show(Severity::Success, "Sent", start);

        let notice = board.visible(start + Duration::from_millis(3999)).expect("Still visible");
        assert_eq!(notice.message, "Sent");
        assert_eq!(notice.severity, Severity::Success);
        assert!(board.visible(start + AUTO_HIDE).is_none());
    }

    #[test]
    fn test_expire_removes_old_notice() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        board.show(Severity::Error, "Failed", start);

        assert!(!board.expire(start + Duration::from_secs(1)));
        assert!(board.expire(start + Duration::from_secs(5)));
        assert!(!board.expire(start + Duration::from_secs(6)));
    }

    #[test]
    fn test_new_notice_replaces_old() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        board.show(Severity::Warning, "first", start);
        board.show(Severity::Error, "second", start + Duration::from_secs(3));

        let notice = board
            .visible(start + Duration::from_secs(5))
            .expect("Timer restarts with the new notice");
        assert_eq!(notice.message, "second");
    }

    #[test]
    fn test_dismiss() {
        let now = Instant::now();
        let mut board = NoticeBoard::default();
        board.show(Severity::Warning, "x", now);
        board.dismiss();
        assert!(board.visible(now).is_none());
    }
}
