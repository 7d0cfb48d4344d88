//! Input guard - rejects clipboard actions and tracks the resulting notices.

use std::fmt;
use std::time::Duration;

/// Clock used for notice deadlines. With `async` this is tokio's clock, so
/// `now` values and the dismiss timer always agree (paused clocks included).
#[cfg(feature = "async")]
pub use tokio::time::Instant;

#[cfg(not(feature = "async"))]
pub use std::time::Instant;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Clipboard actions the field intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardAction {
    Copy,
    Cut,
    Paste,
}

impl fmt::Display for ClipboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClipboardAction::Copy => "copy",
            ClipboardAction::Cut => "cut",
            ClipboardAction::Paste => "paste",
        })
    }
}

/// Result of a clipboard attempt. Every attempt is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// Blocked; carries the id of the notice that was raised.
    Blocked(NoticeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(pub u64);

/// A transient message shown after a blocked action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub action: ClipboardAction,
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notice {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Events delivered by the dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    Dismissed(NoticeId),
}

/// Stack of live notices, newest last.
#[derive(Debug, Default)]
pub struct NoticeStack {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeStack {
    pub fn push(
        &mut self,
        action: ClipboardAction,
        message: &str,
        duration: Duration,
        now: Instant,
    ) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            action,
            message: message.to_string(),
            shown_at: now,
            duration,
        });
        id
    }

    /// Removes the notice with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| !n.is_expired(now))
    }

    /// Drops expired notices and returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired(now));
        before - self.notices.len()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Waits `duration`, then sends a dismissal for `id` unless `token` fires first.
#[cfg(feature = "async")]
pub async fn dismiss_notice_after(
    id: NoticeId,
    duration: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<NoticeEvent>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(notice = id.0, "notice timer cancelled");
            return;
        }
        _ = tokio::time::sleep(duration) => {}
    }

    if let Err(e) = tx.send(NoticeEvent::Dismissed(id)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send notice dismissal: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
