//! Transient outcome notices.
//!
//! Every mutation outcome (load, save, holiday add or delete) is reported
//! through a single [`Notice`]. The editor holds at most one; a new notice
//! replaces the previous one.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use servdesk_domain::impl_domain_status_conversions;

/// Seconds a notice stays visible unless dismissed or replaced.
pub const NOTICE_LIFETIME_SECS: i64 = 4;

/// [`NOTICE_LIFETIME_SECS`] as a duration.
pub fn default_lifetime() -> Duration {
    Duration::seconds(NOTICE_LIFETIME_SECS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl_domain_status_conversions!(NoticeKind {
    Success => "success",
    Warning => "warning",
    Error => "error",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self::at(kind, message, Utc::now())
    }

    pub fn at(kind: NoticeKind, message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self { kind, message: message.into(), raised_at }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn is_expired(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now - self.raised_at >= lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_lifetime() {
        let raised = Utc::now();
        let notice = Notice::at(NoticeKind::Success, "Saved", raised);
        assert!(!notice.is_expired(raised + Duration::seconds(3), default_lifetime()));
        assert!(notice.is_expired(raised + Duration::seconds(4), default_lifetime()));
    }

    #[test]
    fn serializes_kind_lowercase() {
        let json = serde_json::to_value(Notice::error("boom")).unwrap();
        assert_eq!(json["kind"], "error");
        assert!(json["raisedAt"].is_string());
    }
}
