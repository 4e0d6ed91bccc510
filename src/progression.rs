use chrono::NaiveDate;

use crate::models::{SetRequest, UserStats, MAX_HEARTS};

const XP_BASE_PER_SET: u64 = 5;
const XP_WEIGHT_DIVISOR: f64 = 5.0;

/// Whole-day relation between the last logged day and today. Time of day
/// never enters; the comparison is calendar subtraction on `NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayGap {
    FirstEver,
    /// Same calendar day, or a stored date in the future of today.
    SameDay,
    NextDay,
    Missed(i64),
}

pub fn classify_gap(last_log_date: Option<NaiveDate>, today: NaiveDate) -> DayGap {
    let Some(last) = last_log_date else {
        return DayGap::FirstEver;
    };
    match (today - last).num_days() {
        days if days <= 0 => DayGap::SameDay,
        1 => DayGap::NextDay,
        days => DayGap::Missed(days),
    }
}

/// 5 XP per set plus 1 per full 5kg on the bar; absurd weights cap the
/// sum instead of wrapping it.
pub fn xp_from_sets(sets: &[SetRequest]) -> u64 {
    sets.iter().fold(0u64, |total, set| {
        let bonus = (set.weight / XP_WEIGHT_DIVISOR).floor() as u64;
        total.saturating_add(XP_BASE_PER_SET.saturating_add(bonus))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Logged,
    HeartLost { hearts_left: u8, missed_days: i64 },
    FullReset,
}

/// Advance the counters for one logged workout. Missing more than one day
/// costs a heart and the streak; losing the last heart resets XP to zero,
/// discards this log's gain, and refills the hearts. Every branch stamps
/// `last_log_date` with today.
pub fn apply_log(
    stats: &UserStats,
    gap: DayGap,
    xp_gain: u64,
    today: NaiveDate,
) -> (UserStats, LogOutcome) {
    let mut next = stats.clone();
    next.last_log_date = Some(today);

    let outcome = match gap {
        DayGap::FirstEver => {
            next.streak = 1;
            next.xp = next.xp.saturating_add(xp_gain);
            LogOutcome::Logged
        }
        DayGap::SameDay => {
            next.xp = next.xp.saturating_add(xp_gain);
            LogOutcome::Logged
        }
        DayGap::NextDay => {
            next.streak = if next.streak == 0 {
                1
            } else {
                next.streak.saturating_add(1)
            };
            next.xp = next.xp.saturating_add(xp_gain);
            LogOutcome::Logged
        }
        DayGap::Missed(days) => {
            next.streak = 0;
            next.hearts = next.hearts.saturating_sub(1);
            if next.hearts == 0 {
                next.xp = 0;
                next.hearts = MAX_HEARTS;
                LogOutcome::FullReset
            } else {
                next.xp = next.xp.saturating_add(xp_gain);
                LogOutcome::HeartLost {
                    hearts_left: next.hearts,
                    missed_days: days,
                }
            }
        }
    };

    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(weight: f64) -> SetRequest {
        SetRequest { reps: 10, weight }
    }

    #[test]
    fn gap_classification_covers_all_cases() {
        let today = date(2026, 3, 10);
        assert_eq!(classify_gap(None, today), DayGap::FirstEver);
        assert_eq!(classify_gap(Some(today), today), DayGap::SameDay);
        assert_eq!(classify_gap(Some(date(2026, 3, 9)), today), DayGap::NextDay);
        assert_eq!(
            classify_gap(Some(date(2026, 3, 5)), today),
            DayGap::Missed(5)
        );
    }

    #[test]
    fn gap_spanning_month_boundary_is_next_day() {
        assert_eq!(
            classify_gap(Some(date(2026, 2, 28)), date(2026, 3, 1)),
            DayGap::NextDay
        );
        assert_eq!(
            classify_gap(Some(date(2025, 12, 31)), date(2026, 1, 1)),
            DayGap::NextDay
        );
    }

    #[test]
    fn future_last_log_date_counts_as_same_day() {
        let today = date(2026, 3, 10);
        assert_eq!(classify_gap(Some(date(2026, 3, 12)), today), DayGap::SameDay);
    }

    #[test]
    fn xp_is_base_plus_weight_bonus() {
        assert_eq!(xp_from_sets(&[]), 0);
        assert_eq!(xp_from_sets(&[set(0.0)]), 5);
        assert_eq!(xp_from_sets(&[set(4.9)]), 5);
        assert_eq!(xp_from_sets(&[set(5.0)]), 6);
        assert_eq!(xp_from_sets(&[set(20.0)]), 9);
        assert_eq!(xp_from_sets(&[set(23.0)]), 9);
        assert_eq!(xp_from_sets(&[set(20.0), set(20.0), set(25.0)]), 28);
    }

    #[test]
    fn absurd_weights_saturate_instead_of_wrapping() {
        // A finite-but-enormous weight survives the lenient decode, so the
        // sum must cap at u64::MAX rather than overflow.
        let huge: SetRequest = serde_json::from_str(r#"{"reps":1,"weight":1.0e20}"#).unwrap();
        assert_eq!(xp_from_sets(&[huge.clone()]), u64::MAX);
        assert_eq!(xp_from_sets(&[huge, set(20.0)]), u64::MAX);
    }

    #[test]
    fn xp_near_the_ceiling_caps_instead_of_wrapping() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: u64::MAX - 3,
            streak: 2,
            hearts: 4,
            last_log_date: Some(date(2026, 3, 9)),
        };
        let (next, outcome) = apply_log(&stats, DayGap::NextDay, 10, today);
        assert_eq!(outcome, LogOutcome::Logged);
        assert_eq!(next.xp, u64::MAX);
        assert_eq!(next.streak, 3);

        let (again, _) = apply_log(&next, DayGap::SameDay, u64::MAX, today);
        assert_eq!(again.xp, u64::MAX);
    }

    #[test]
    fn first_log_starts_streak_at_one() {
        let today = date(2026, 3, 10);
        let (next, outcome) = apply_log(&UserStats::default(), DayGap::FirstEver, 15, today);
        assert_eq!(outcome, LogOutcome::Logged);
        assert_eq!(next.streak, 1);
        assert_eq!(next.xp, 15);
        assert_eq!(next.hearts, MAX_HEARTS);
        assert_eq!(next.last_log_date, Some(today));
    }

    #[test]
    fn same_day_log_stacks_xp_without_touching_streak() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 100,
            streak: 5,
            hearts: 3,
            last_log_date: Some(today),
        };
        let (next, outcome) = apply_log(&stats, DayGap::SameDay, 20, today);
        assert_eq!(outcome, LogOutcome::Logged);
        assert_eq!(next.xp, 120);
        assert_eq!(next.streak, 5);
        assert_eq!(next.hearts, 3);

        // A second session the same day adds exactly the gain again.
        let (again, outcome) = apply_log(&next, DayGap::SameDay, 20, today);
        assert_eq!(outcome, LogOutcome::Logged);
        assert_eq!(again.xp, 140);
        assert_eq!(again.streak, 5);
    }

    #[test]
    fn next_day_log_increments_streak() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 50,
            streak: 2,
            hearts: 4,
            last_log_date: Some(date(2026, 3, 9)),
        };
        let (next, _) = apply_log(&stats, DayGap::NextDay, 10, today);
        assert_eq!(next.streak, 3);
        assert_eq!(next.xp, 60);
    }

    #[test]
    fn yesterdays_logger_advances_through_classify_and_apply() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 90,
            streak: 2,
            hearts: 4,
            last_log_date: Some(date(2026, 3, 9)),
        };
        let gap = classify_gap(stats.last_log_date, today);
        let gain = xp_from_sets(&[SetRequest {
            reps: 8,
            weight: 40.0,
        }]);
        assert_eq!(gain, 13);

        let (next, outcome) = apply_log(&stats, gap, gain, today);
        assert_eq!(outcome, LogOutcome::Logged);
        assert_eq!(next.xp, 103);
        assert_eq!(next.streak, 3);
        assert_eq!(next.hearts, 4);
    }

    #[test]
    fn next_day_after_broken_streak_restarts_at_one() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 50,
            streak: 0,
            hearts: 2,
            last_log_date: Some(date(2026, 3, 9)),
        };
        let (next, _) = apply_log(&stats, DayGap::NextDay, 10, today);
        assert_eq!(next.streak, 1);
    }

    #[test]
    fn missed_days_cost_a_heart_and_the_streak() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 200,
            streak: 7,
            hearts: 4,
            last_log_date: Some(date(2026, 3, 6)),
        };
        let (next, outcome) = apply_log(&stats, DayGap::Missed(4), 12, today);
        assert_eq!(
            outcome,
            LogOutcome::HeartLost {
                hearts_left: 3,
                missed_days: 4
            }
        );
        assert_eq!(next.streak, 0);
        assert_eq!(next.hearts, 3);
        assert_eq!(next.xp, 212);
    }

    #[test]
    fn losing_the_last_heart_resets_xp_and_discards_the_gain() {
        let today = date(2026, 3, 10);
        let stats = UserStats {
            xp: 999,
            streak: 3,
            hearts: 1,
            last_log_date: Some(date(2026, 3, 1)),
        };
        let (next, outcome) = apply_log(&stats, DayGap::Missed(9), 50, today);
        assert_eq!(outcome, LogOutcome::FullReset);
        assert_eq!(next.xp, 0);
        assert_eq!(next.streak, 0);
        assert_eq!(next.hearts, MAX_HEARTS);
        assert_eq!(next.last_log_date, Some(today));
    }

    #[test]
    fn hearts_never_go_below_zero_mid_reset() {
        let stats = UserStats {
            hearts: 0,
            ..UserStats::default()
        };
        let (next, outcome) = apply_log(&stats, DayGap::Missed(3), 10, date(2026, 3, 10));
        assert_eq!(outcome, LogOutcome::FullReset);
        assert_eq!(next.hearts, MAX_HEARTS);
    }
}
