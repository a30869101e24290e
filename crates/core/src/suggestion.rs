//! Personalized practice suggestions derived from one scoring event.
//!
//! The generator is a pure function of the score, the streak update, and
//! the two pitch sequences. It always emits, in order: an accuracy band
//! message, a streak tier message, optionally a pitch-control warning, and
//! a closing streak-record message — three or four entries, never fewer.

use crate::achievement::{STREAK_30_DAYS, STREAK_7_DAYS};
use crate::pitch::PitchSample;
use crate::streak::StreakUpdate;

/// |Δfrequency| in Hz above which a pair counts as a large fluctuation.
pub const FLUCTUATION_THRESHOLD_HZ: f64 = 10.0;

/// Accuracy below which the "focus on difficult parts" message applies.
pub const LOW_ACCURACY: f64 = 70.0;
/// Accuracy at or above which the top-tier message applies.
pub const HIGH_ACCURACY: f64 = 90.0;

/// Build the ordered suggestion list for one scoring event.
///
/// The fluctuation check pairs samples by index and skips indices beyond
/// the shorter sequence. The closing message uses the pre-update longest
/// snapshot carried by [`StreakUpdate`], so a freshly set record is
/// congratulated rather than compared against itself.
pub fn generate(
    accuracy: f64,
    streak: &StreakUpdate,
    user: &[PitchSample],
    reference: &[PitchSample],
) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(4);

    if accuracy < LOW_ACCURACY {
        suggestions.push(
            "Your accuracy is below 70%. Focus on practicing the difficult parts of the song to improve."
                .to_string(),
        );
    } else if accuracy < HIGH_ACCURACY {
        suggestions.push(
            "You're getting close! Keep practicing to boost your accuracy to above 90%.".to_string(),
        );
    } else {
        suggestions.push("Great job! You're achieving high accuracy. Keep it up!".to_string());
    }

    let current = streak.state.current_streak;
    if current < STREAK_7_DAYS {
        suggestions.push(
            "Try to maintain a streak of 7 days to build consistency and improve over time."
                .to_string(),
        );
    } else if current < STREAK_30_DAYS {
        suggestions.push(
            "Well done! You've built a solid streak. Aim for a 30-day streak to reach new heights."
                .to_string(),
        );
    } else {
        suggestions.push(
            "You're doing fantastic with your streak! Keep challenging yourself to beat your longest streak."
                .to_string(),
        );
    }

    let fluctuated = user
        .iter()
        .zip(reference)
        .any(|(u, r)| (u.frequency - r.frequency).abs() > FLUCTUATION_THRESHOLD_HZ);
    if fluctuated {
        suggestions.push(
            "Your pitch fluctuated significantly in certain sections. Practice controlling your pitch for better accuracy."
                .to_string(),
        );
    }

    if streak.is_new_record() {
        suggestions.push(
            "You've beaten your longest streak! Keep up the momentum and push for even longer streaks."
                .to_string(),
        );
    } else {
        suggestions.push(format!(
            "Your longest streak is {} days. Try to beat it by practicing consistently.",
            streak.state.longest_streak
        ));
    }

    suggestions
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

    fn series(frequencies: &[f64]) -> Vec<PitchSample> {
        frequencies
            .iter()
            .enumerate()
            .map(|(i, &frequency)| PitchSample {
                time: i as f64,
                frequency,
            })
            .collect()
    }

    #[test]
    fn steady_pitch_yields_three_entries() {
        let streak = update(1, 1, StreakChange::Started, 0);
        let user = series(&[440.0]);
        let suggestions = generate(50.0, &streak, &user, &user);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].starts_with("Your accuracy is below 70%"));
        assert!(suggestions[1].starts_with("Try to maintain a streak of 7 days"));
        assert!(suggestions[2].starts_with("Your longest streak is 1 days"));
    }

    #[test]
    fn large_fluctuation_adds_the_warning() {
        let streak = update(1, 1, StreakChange::Started, 0);
        let suggestions = generate(50.0, &streak, &series(&[455.0]), &series(&[440.0]));
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[2].starts_with("Your pitch fluctuated significantly"));
    }

    #[test]
    fn fluctuation_exactly_at_threshold_is_tolerated() {
        let streak = update(1, 1, StreakChange::Started, 0);
        let suggestions = generate(50.0, &streak, &series(&[450.0]), &series(&[440.0]));
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn fluctuation_skips_indices_past_the_reference() {
        let streak = update(1, 1, StreakChange::Started, 0);
        // The wild value at index 1 has no reference counterpart.
        let suggestions = generate(100.0, &streak, &series(&[440.0, 900.0]), &series(&[440.0]));
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn middle_accuracy_band() {
        let streak = update(1, 1, StreakChange::Started, 0);
        let user = series(&[440.0]);
        let suggestions = generate(70.0, &streak, &user, &user);
        assert!(suggestions[0].starts_with("You're getting close!"));

        let suggestions = generate(89.99, &streak, &user, &user);
        assert!(suggestions[0].starts_with("You're getting close!"));
    }

    #[test]
    fn top_accuracy_band() {
        let streak = update(1, 1, StreakChange::Started, 0);
        let user = series(&[440.0]);
        let suggestions = generate(90.0, &streak, &user, &user);
        assert!(suggestions[0].starts_with("Great job!"));
    }

    #[test]
    fn streak_tiers() {
        let user = series(&[440.0]);

        let suggestions = generate(50.0, &update(7, 10, StreakChange::Extended, 10), &user, &user);
        assert!(suggestions[1].starts_with("Well done!"));

        let suggestions = generate(50.0, &update(30, 30, StreakChange::Extended, 29), &user, &user);
        assert!(suggestions[1].starts_with("You're doing fantastic"));
    }

    #[test]
    fn new_record_gets_the_congratulation() {
        let user = series(&[440.0]);
        let suggestions = generate(50.0, &update(5, 5, StreakChange::Extended, 4), &user, &user);
        assert!(suggestions[2].starts_with("You've beaten your longest streak!"));
    }
}
