//! The policy editor session.
//!
//! Holds the last saved policy, a staged copy that edits apply to, the
//! holiday list and the current notice. Methods take `&mut self`, so a
//! session has one thread of control and every backend call completes
//! before the next edit is applied.

use std::num::NonZeroU32;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use servdesk_common::validation::ValidationError;
use servdesk_domain::{
    BreachTier, Holiday, HoursMode, IsoWeekday, NotificationKind, NotifyRole, Percent, PolicySummary,
    PriorityTarget, SlaPolicy, TierLevel, WallClock,
};
use tracing::{debug, warn};

use super::draft::{HolidayDraft, RuleDraft};
use super::notice::{default_lifetime, Notice};
use super::section::EditorSection;
use crate::sla::ports::SlaBackend;

/// Read-only digest for the overview section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOverview {
    pub policy: PolicySummary,
    pub holiday_count: usize,
    pub dirty: bool,
}

/// Client-side editing session for the SLA policy.
pub struct PolicyEditor {
    backend: Arc<dyn SlaBackend>,
    saved: SlaPolicy,
    staged: SlaPolicy,
    section: EditorSection,
    holidays: Vec<Holiday>,
    notice: Option<Notice>,
    notice_lifetime: Duration,
    rule_draft: RuleDraft,
    holiday_draft: HolidayDraft,
}

impl PolicyEditor {
    /// Create a session showing defaults.
    ///
    /// `deep_link` selects the initial section; unknown or absent links fall
    /// back to the overview.
    pub fn new(backend: Arc<dyn SlaBackend>, deep_link: Option<&str>) -> Self {
        let section = deep_link.and_then(EditorSection::from_deep_link).unwrap_or_default();
        Self {
            backend,
            saved: SlaPolicy::default(),
            staged: SlaPolicy::default(),
            section,
            holidays: Vec::new(),
            notice: None,
            notice_lifetime: default_lifetime(),
            rule_draft: RuleDraft::default(),
            holiday_draft: HolidayDraft::default(),
        }
    }

    /// Override how long notices stay visible.
    pub fn with_notice_lifetime(mut self, lifetime: Duration) -> Self {
        self.notice_lifetime = lifetime;
        self
    }

    /// Fetch the policy and the holiday list.
    ///
    /// The stored document is merged over defaults. On failure the defaults
    /// stay in place and a warning notice is raised.
    pub async fn load(&mut self) {
        match self.fetch_policy().await {
            Ok(policy) => {
                self.saved = policy.clone();
                self.staged = policy;
            }
            Err(err) => {
                warn!(error = %err, "Failed to load SLA configuration, using defaults");
                self.raise(Notice::warning(format!(
                    "Could not load the SLA configuration, showing defaults: {}",
                    err
                )));
            }
        }
        self.refresh_holidays().await;
    }

    async fn fetch_policy(&self) -> servdesk_domain::Result<SlaPolicy> {
        let document = self.backend.fetch_configuration().await?;
        SlaPolicy::from_partial(&document)
    }

    // Sections

    pub fn section(&self) -> EditorSection {
        self.section
    }

    /// Switch sections. Staged edits are kept.
    pub fn select_section(&mut self, section: EditorSection) {
        debug!(from = %self.section, to = %section, "Switching editor section");
        self.section = section;
    }

    /// Switch by deep-link token. Returns `false` for unknown tokens.
    pub fn select_deep_link(&mut self, token: &str) -> bool {
        match EditorSection::from_deep_link(token) {
            Some(section) => {
                self.select_section(section);
                true
            }
            None => false,
        }
    }

    // Staged state

    /// The staged policy, including unsaved edits.
    pub fn policy(&self) -> &SlaPolicy {
        &self.staged
    }

    /// The policy as last loaded or saved.
    pub fn saved_policy(&self) -> &SlaPolicy {
        &self.saved
    }

    pub fn is_dirty(&self) -> bool {
        self.staged != self.saved
    }

    /// Drop staged edits and return to the last saved policy.
    pub fn discard_changes(&mut self) {
        self.staged = self.saved.clone();
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn overview(&self) -> EditorOverview {
        EditorOverview {
            policy: self.staged.summary(),
            holiday_count: self.holidays.len(),
            dirty: self.is_dirty(),
        }
    }

    /// Apply an arbitrary edit to the staged policy.
    pub fn edit<F>(&mut self, edit: F)
    where
        F: FnOnce(&SlaPolicy) -> SlaPolicy,
    {
        self.staged = edit(&self.staged);
    }

    // Business hours

    /// Switch mode without touching the hours or working days.
    pub fn set_hours_mode(&mut self, mode: HoursMode) {
        self.edit(|p| p.with_business_hours(p.business_hours().with_mode(mode)));
    }

    pub fn set_start_time(&mut self, time: WallClock) {
        self.edit(|p| p.with_business_hours(p.business_hours().with_start_time(time)));
    }

    pub fn set_end_time(&mut self, time: WallClock) {
        self.edit(|p| p.with_business_hours(p.business_hours().with_end_time(time)));
    }

    /// Add or remove a working day. Repeating the same toggle is a no-op.
    pub fn set_working_day(&mut self, day: IsoWeekday, enabled: bool) {
        self.edit(|p| p.with_business_hours(p.business_hours().with_day(day, enabled)));
    }

    // Priorities

    pub fn update_priority<F>(&mut self, name: &str, edit: F)
    where
        F: FnOnce(&PriorityTarget) -> PriorityTarget,
    {
        self.edit(|p| p.with_priority_edit(name, edit));
    }

    pub fn set_priority_enabled(&mut self, name: &str, enabled: bool) {
        self.update_priority(name, |t| t.with_enabled(enabled));
    }

    pub fn set_response_minutes(&mut self, name: &str, minutes: NonZeroU32) {
        self.update_priority(name, |t| t.with_response_minutes(minutes));
    }

    pub fn set_resolution_hours(&mut self, name: &str, hours: NonZeroU32) {
        self.update_priority(name, |t| t.with_resolution_hours(hours));
    }

    // Escalation

    pub fn set_trigger_percent(&mut self, tier: TierLevel, percent: Percent) {
        self.edit(|p| {
            let escalation = p.escalation();
            let updated = match tier {
                TierLevel::Level1 => escalation.with_level1(escalation.level1.with_trigger_percent(percent)),
                TierLevel::Level2 => escalation.with_level2(escalation.level2.with_trigger_percent(percent)),
                TierLevel::Breach => escalation.with_breach(BreachTier {
                    trigger_percent: percent,
                    ..escalation.breach.clone()
                }),
            };
            p.with_escalation(updated)
        });
    }

    pub fn set_notify_role(&mut self, tier: TierLevel, role: NotifyRole, notify: bool) {
        self.edit(|p| p.with_escalation(p.escalation().with_role(tier, role, notify)));
    }

    pub fn set_auto_reassign(&mut self, enabled: bool) {
        self.edit(|p| {
            let escalation = p.escalation();
            p.with_escalation(escalation.with_breach(escalation.breach.with_auto_reassign(enabled)))
        });
    }

    // Notifications

    pub fn set_notification(&mut self, kind: NotificationKind, enabled: bool) {
        self.edit(|p| p.with_notifications(p.notifications().with(kind, enabled)));
    }

    // Custom rules

    pub fn rule_draft(&self) -> &RuleDraft {
        &self.rule_draft
    }

    pub fn rule_draft_mut(&mut self) -> &mut RuleDraft {
        &mut self.rule_draft
    }

    /// Append the drafted rule to the staged policy and clear the draft.
    ///
    /// A blank name is rejected and the draft is left as typed.
    pub fn add_custom_rule(&mut self) -> Result<(), ValidationError> {
        let rule = self.rule_draft.to_rule()?;
        self.edit(|p| p.with_custom_rule(rule));
        self.rule_draft.reset();
        Ok(())
    }

    pub fn remove_custom_rule(&mut self, index: usize) {
        self.edit(|p| p.without_custom_rule(index));
    }

    // Save

    /// Validate and submit the whole staged policy.
    ///
    /// Returns `true` on success. Failure keeps the staged edits.
    pub async fn save(&mut self) -> bool {
        if let Err(err) = self.staged.validate() {
            self.raise(Notice::error(err.to_string()));
            return false;
        }

        match self.backend.save_configuration(&self.staged).await {
            Ok(stored) => {
                self.saved = stored.clone();
                self.staged = stored;
                self.raise(Notice::success("SLA configuration saved"));
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to save SLA configuration");
                self.raise(Notice::error(format!("Failed to save SLA configuration: {}", err)));
                false
            }
        }
    }

    // Holidays

    pub fn holiday_draft(&self) -> &HolidayDraft {
        &self.holiday_draft
    }

    pub fn holiday_draft_mut(&mut self) -> &mut HolidayDraft {
        &mut self.holiday_draft
    }

    /// Create the drafted holiday, then refetch the list once.
    pub async fn add_holiday(&mut self) -> bool {
        let request = match self.holiday_draft.to_new_holiday() {
            Ok(request) => request,
            Err(err) => {
                self.raise(Notice::error(err.to_string()));
                return false;
            }
        };

        match self.backend.create_holiday(&request).await {
            Ok(holiday) => {
                self.holiday_draft.reset();
                self.raise(Notice::success(format!("Added holiday {}", holiday.name)));
                self.refresh_holidays().await;
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to add holiday");
                self.raise(Notice::error(format!("Failed to add holiday: {}", err)));
                false
            }
        }
    }

    /// Delete a holiday, then refetch the list once. On failure the list is
    /// left as it was.
    pub async fn delete_holiday(&mut self, id: &str) -> bool {
        match self.backend.delete_holiday(id).await {
            Ok(()) => {
                self.raise(Notice::success("Holiday deleted"));
                self.refresh_holidays().await;
                true
            }
            Err(err) => {
                warn!(error = %err, holiday_id = %id, "Failed to delete holiday");
                self.raise(Notice::error(format!("Failed to delete holiday: {}", err)));
                false
            }
        }
    }

    async fn refresh_holidays(&mut self) {
        match self.backend.list_holidays().await {
            Ok(holidays) => self.holidays = holidays,
            Err(err) => {
                warn!(error = %err, "Failed to fetch holidays");
                self.raise(Notice::warning(format!("Could not load holidays: {}", err)));
            }
        }
    }

    // Notices

    /// The current notice, expired or not.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The current notice if it is still within its lifetime at `now`.
    pub fn visible_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired(now, self.notice_lifetime))
    }

    /// Drop the notice once its lifetime has passed.
    pub fn expire_notice(&mut self, now: DateTime<Utc>) {
        if self.visible_notice(now).is_none() {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn raise(&mut self, notice: Notice) {
        debug!(kind = %notice.kind, message = %notice.message, "Raising notice");
        self.notice = Some(notice);
    }
}
