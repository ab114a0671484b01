//! Outbound activity notifications.
//!
//! A won round is reported to an external streak/activity collaborator.
//! The report is fire-and-forget: it runs after the engine has committed
//! the Won state, and no implementation may fail the caller.

use chrono::Local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Game,
}

impl ActivityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
        }
    }
}

pub trait ActivityReporter {
    /// Records one activity event for `user_id`. Implementations handle
    /// their own failures; none are surfaced to the game.
    fn report_activity(&mut self, user_id: &str, kind: ActivityKind);
}

/// Reporter that writes the event to the log, date-stamped the way the
/// backend keys its streak updates. Stands in for the HTTP collaborator.
pub struct LogReporter;

impl ActivityReporter for LogReporter {
    fn report_activity(&mut self, user_id: &str, kind: ActivityKind) {
        log::info!(
            "activity: user={user_id} kind={} date={}",
            kind.as_str(),
            Local::now().format("%Y-%m-%d")
        );
    }
}
