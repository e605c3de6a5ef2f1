//! Transient success/error messages with a fixed time to live.
//!
//! Every posted notice takes a ticket. The timer that clears a notice only
//! acts if its ticket is still current, so posting again (or dismissing)
//! cancels the pending clear of the previous notice.
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;

pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    ticket: u64,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replaces the shown notice and returns the ticket its timer must present.
    pub fn post(&mut self, notice: Notice) -> u64 {
        self.ticket += 1;
        self.current = Some(notice);
        self.ticket
    }

    /// Clears the notice if `ticket` is still the latest one.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.ticket += 1;
        self.current = None;
    }
}

/// Reactive handle a view uses to post notices.
#[derive(Clone, Copy)]
pub struct Flash {
    slot: RwSignal<NoticeSlot>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            slot: create_rw_signal(NoticeSlot::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Notice::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Notice::error(text));
    }

    pub fn dismiss(&self) {
        let _ = self.slot.try_update(NoticeSlot::dismiss);
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.with(|s| s.current().cloned())
    }

    pub fn show(&self, notice: Notice) {
        let Some(ticket) = self.slot.try_update(|s| s.post(notice)) else {
            return;
        };
        let slot = self.slot;
        spawn_local(async move {
            sleep(NOTICE_TTL).await;
            // The view may be gone by now; a disposed signal just ignores this.
            let _ = slot.try_update(|s| s.expire(ticket));
        });
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    move || {
        flash
            .current()
            .map(|n| view! { <p class=n.kind.css_class()>{n.text}</p> })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_clears_its_own_notice() {
        let mut slot = NoticeSlot::default();
        let ticket = slot.post(Notice::error("All fields are mandatory."));
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some("All fields are mandatory."));
        assert!(slot.expire(ticket));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn stale_timer_leaves_newer_notice_alone() {
        let mut slot = NoticeSlot::default();
        let first = slot.post(Notice::error("Phone number must be exactly 10 digits."));
        let second = slot.post(Notice::success("Employee added"));

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.kind), Some(NoticeKind::Success));

        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn dismiss_cancels_pending_expiry() {
        let mut slot = NoticeSlot::default();
        let ticket = slot.post(Notice::error("Error adding employee."));
        slot.dismiss();
        assert_eq!(slot.current(), None);
        assert!(!slot.expire(ticket));
    }

    #[test]
    fn kinds_map_to_css_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
        assert_eq!(NOTICE_TTL, Duration::from_secs(5));
    }
}
