//! Achievement badge catalog and unlock evaluation.

use serde::Serialize;

use crate::streak::StreakUpdate;

/// Accuracy at or above which the accuracy badge unlocks.
pub const ACCURACY_MASTER_THRESHOLD: f64 = 90.0;
/// Streak length for the first streak badge.
pub const STREAK_7_DAYS: i32 = 7;
/// Streak length for the second streak badge.
pub const STREAK_30_DAYS: i32 = 30;

/// The fixed badge catalog. At most one achievement row exists per
/// (user, badge title); unlocking is idempotent and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    AccuracyMaster,
    SevenDayStreak,
    ThirtyDayStreak,
    LongestStreak,
}

impl Badge {
    /// Stable title used as the per-user uniqueness key.
    pub fn title(self) -> &'static str {
        match self {
            Self::AccuracyMaster => "Accuracy Master",
            Self::SevenDayStreak => "7-Day Streak",
            Self::ThirtyDayStreak => "30-Day Streak",
            Self::LongestStreak => "Longest Streak",
        }
    }

    /// Description stored alongside the unlock.
    pub fn description(self, current_streak: i32) -> String {
        match self {
            Self::AccuracyMaster => "Achieved 90%+ accuracy in a song".to_string(),
            Self::SevenDayStreak => "Practiced for 7 consecutive days".to_string(),
            Self::ThirtyDayStreak => "Practiced for 30 consecutive days".to_string(),
            Self::LongestStreak => {
                format!("Reached your longest streak of {current_streak} days")
            }
        }
    }
}

/// Evaluate which badges this scoring event qualifies for.
///
/// Conditions are independent; several badges can qualify at once.
/// Duplicate suppression happens at the store (unique title per user),
/// not here.
///
/// The longest-streak badge compares against the pre-update snapshot
/// carried by [`StreakUpdate`] — the tracker has already folded a new
/// record into `longest_streak` by the time this runs, so a post-update
/// comparison would never fire.
pub fn evaluate(accuracy: f64, streak: &StreakUpdate) -> Vec<Badge> {
    let mut unlocked = Vec::new();
    if accuracy >= ACCURACY_MASTER_THRESHOLD {
        unlocked.push(Badge::AccuracyMaster);
    }
    if streak.state.current_streak >= STREAK_7_DAYS {
        unlocked.push(Badge::SevenDayStreak);
    }
    if streak.state.current_streak >= STREAK_30_DAYS {
        unlocked.push(Badge::ThirtyDayStreak);
    }
    if streak.is_new_record() {
        unlocked.push(Badge::LongestStreak);
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::streak::{StreakChange, StreakState, StreakUpdate};

    fn update(current: i32, longest: i32, change: StreakChange, previous_longest: i32) -> StreakUpdate {
        StreakUpdate {
            state: StreakState {
                current_streak: current,
                longest_streak: longest,
                last_practice_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            },
            change,
            previous_longest,
        }
    }

    #[test]
    fn low_accuracy_short_streak_unlocks_nothing() {
        let badges = evaluate(50.0, &update(1, 1, StreakChange::Started, 0));
        assert!(badges.is_empty());
    }

    #[test]
    fn accuracy_master_at_ninety() {
        let badges = evaluate(90.0, &update(1, 3, StreakChange::Reset, 3));
        assert_eq!(badges, vec![Badge::AccuracyMaster]);
    }

    #[test]
    fn just_below_ninety_does_not_unlock() {
        let badges = evaluate(89.99, &update(1, 3, StreakChange::Reset, 3));
        assert!(badges.is_empty());
    }

    #[test]
    fn seven_day_streak_at_threshold() {
        let badges = evaluate(10.0, &update(7, 10, StreakChange::Extended, 10));
        assert_eq!(badges, vec![Badge::SevenDayStreak]);
    }

    #[test]
    fn thirty_day_streak_implies_seven() {
        let badges = evaluate(10.0, &update(30, 30, StreakChange::Extended, 29));
        assert_eq!(
            badges,
            vec![
                Badge::SevenDayStreak,
                Badge::ThirtyDayStreak,
                Badge::LongestStreak
            ]
        );
    }

    #[test]
    fn longest_streak_needs_an_actual_record() {
        // Extended but still below the earlier longest: no record badge.
        let badges = evaluate(10.0, &update(4, 10, StreakChange::Extended, 10));
        assert!(badges.is_empty());

        // First ever practice is a trivial 1-day "record" and does not count.
        let badges = evaluate(10.0, &update(1, 1, StreakChange::Started, 0));
        assert!(badges.is_empty());
    }

    #[test]
    fn several_badges_in_one_pass() {
        let badges = evaluate(95.0, &update(8, 8, StreakChange::Extended, 7));
        assert_eq!(
            badges,
            vec![
                Badge::AccuracyMaster,
                Badge::SevenDayStreak,
                Badge::LongestStreak
            ]
        );
    }

    #[test]
    fn titles_and_descriptions() {
        assert_eq!(Badge::AccuracyMaster.title(), "Accuracy Master");
        assert_eq!(Badge::SevenDayStreak.title(), "7-Day Streak");
        assert_eq!(Badge::ThirtyDayStreak.title(), "30-Day Streak");
        assert_eq!(
            Badge::LongestStreak.description(12),
            "Reached your longest streak of 12 days"
        );
    }
}
