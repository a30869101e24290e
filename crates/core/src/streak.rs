//! Daily practice streak state machine.
//!
//! Every successful scoring event advances the streak regardless of the
//! score; one attempt per calendar day is enough to keep it alive. Time of
//! day is discarded — transitions key off whole [`NaiveDate`]s.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user practice continuity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive calendar days with at least one scoring event.
    pub current_streak: i32,
    /// Highest `current_streak` ever reached. Monotonically non-decreasing.
    pub longest_streak: i32,
    /// Calendar day of the last credited practice.
    pub last_practice_date: NaiveDate,
}

/// How a scoring event changed the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First ever scoring event for this user.
    Started,
    /// Already credited for this calendar day; state untouched.
    AlreadyCredited,
    /// Practiced on consecutive days; the current streak grew by one.
    Extended,
    /// Gap of two or more days, or a day earlier than the last credited
    /// one; current streak reset to 1, longest untouched.
    Reset,
}

/// Result of advancing the streak for one scoring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdate {
    pub state: StreakState,
    pub change: StreakChange,
    /// Longest streak before this event was applied; zero for a brand-new
    /// user. Achievement evaluation and the closing suggestion compare
    /// against this snapshot, since `state.longest_streak` has already
    /// absorbed any new record by the time they run.
    pub previous_longest: i32,
}

impl StreakUpdate {
    /// True when this event pushed the current streak past every earlier
    /// one. A first-ever practice or a reset never counts as a record.
    pub fn is_new_record(&self) -> bool {
        self.change == StreakChange::Extended && self.state.current_streak > self.previous_longest
    }
}

/// Advance the streak state machine for a scoring event on `today`.
///
/// Transition rules, evaluated in order:
/// 1. no prior state: start at `{1, 1, today}`
/// 2. same day: no change
/// 3. exactly one day later: increment, fold into longest
/// 4. anything else: reset current to 1, longest untouched
pub fn advance(existing: Option<StreakState>, today: NaiveDate) -> StreakUpdate {
    let Some(prev) = existing else {
        return StreakUpdate {
            state: StreakState {
                current_streak: 1,
                longest_streak: 1,
                last_practice_date: today,
            },
            change: StreakChange::Started,
            previous_longest: 0,
        };
    };

    let previous_longest = prev.longest_streak;
    match (today - prev.last_practice_date).num_days() {
        0 => StreakUpdate {
            state: prev,
            change: StreakChange::AlreadyCredited,
            previous_longest,
        },
        1 => {
            let current_streak = prev.current_streak + 1;
            StreakUpdate {
                state: StreakState {
                    current_streak,
                    longest_streak: prev.longest_streak.max(current_streak),
                    last_practice_date: today,
                },
                change: StreakChange::Extended,
                previous_longest,
            }
        }
        _ => StreakUpdate {
            state: StreakState {
                current_streak: 1,
                longest_streak: prev.longest_streak,
                last_practice_date: today,
            },
            change: StreakChange::Reset,
            previous_longest,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn state(current: i32, longest: i32, last: NaiveDate) -> StreakState {
        StreakState {
            current_streak: current,
            longest_streak: longest,
            last_practice_date: last,
        }
    }

    #[test]
    fn first_event_starts_at_one() {
        let update = advance(None, day(1));
        assert_eq!(update.state, state(1, 1, day(1)));
        assert_eq!(update.change, StreakChange::Started);
        assert_eq!(update.previous_longest, 0);
        assert!(!update.is_new_record());
    }

    #[test]
    fn same_day_is_a_no_op() {
        let prev = state(4, 9, day(10));
        let update = advance(Some(prev), day(10));
        assert_eq!(update.state, prev);
        assert_eq!(update.change, StreakChange::AlreadyCredited);
    }

    #[test]
    fn next_day_increments() {
        let update = advance(Some(state(1, 1, day(10))), day(11));
        assert_eq!(update.state, state(2, 2, day(11)));
        assert_eq!(update.change, StreakChange::Extended);
        assert_eq!(update.previous_longest, 1);
        assert!(update.is_new_record());
    }

    #[test]
    fn increment_below_longest_is_not_a_record() {
        let update = advance(Some(state(3, 10, day(10))), day(11));
        assert_eq!(update.state, state(4, 10, day(11)));
        assert!(!update.is_new_record());
    }

    #[test]
    fn two_day_gap_resets() {
        let update = advance(Some(state(5, 5, day(10))), day(13));
        assert_eq!(update.state, state(1, 5, day(13)));
        assert_eq!(update.change, StreakChange::Reset);
    }

    #[test]
    fn earlier_day_resets() {
        // A clock that moved backwards is treated like a gap.
        let update = advance(Some(state(5, 5, day(10))), day(8));
        assert_eq!(update.state, state(1, 5, day(8)));
        assert_eq!(update.change, StreakChange::Reset);
    }

    #[test]
    fn longest_never_decreases() {
        let mut st = advance(None, day(1));
        for d in 2..=5 {
            st = advance(Some(st.state), day(d));
        }
        assert_eq!(st.state.longest_streak, 5);

        let after_reset = advance(Some(st.state), day(20));
        assert_eq!(after_reset.state.current_streak, 1);
        assert_eq!(after_reset.state.longest_streak, 5);
    }
}
