use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{
    BestRecord, CalendarDay, CalendarResponse, NextWorkout, RecordsResponse, VolumePoint,
    VolumeResponse, WeeklyPlan, WorkoutLog,
};

pub const CALENDAR_WINDOW_DAYS: usize = 60;

/// The gym-day total counts every distinct logged date, not just the window.
pub fn build_calendar(logs: &[WorkoutLog], today: NaiveDate) -> CalendarResponse {
    let trained: BTreeSet<NaiveDate> = logs.iter().map(|log| log.date).collect();

    let mut days = Vec::with_capacity(CALENDAR_WINDOW_DAYS);
    for offset in (0..CALENDAR_WINDOW_DAYS).rev() {
        let date = today - Duration::days(offset as i64);
        days.push(CalendarDay {
            date,
            trained: trained.contains(&date),
        });
    }

    CalendarResponse {
        days,
        total_gym_days: trained.len(),
        window_days: CALENDAR_WINDOW_DAYS,
    }
}

pub fn build_volume(logs: &[WorkoutLog]) -> VolumeResponse {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for log in logs {
        let lifted: f64 = log
            .sets
            .iter()
            .filter(|set| set.reps > 0 && set.weight > 0.0)
            .map(|set| set.reps as f64 * set.weight)
            .sum();
        *daily.entry(log.date).or_insert(0.0) += lifted;
    }

    let points: Vec<VolumePoint> = daily
        .into_iter()
        .map(|(date, total_kg)| VolumePoint { date, total_kg })
        .collect();

    let improvement_kg = match (points.first(), points.last()) {
        (Some(first), Some(last)) => last.total_kg - first.total_kg,
        _ => 0.0,
    };

    VolumeResponse {
        points,
        improvement_kg,
    }
}

/// A strictly heavier set takes the record, so ties keep the earliest date.
pub fn build_records(logs: &[WorkoutLog]) -> RecordsResponse {
    let mut best: BTreeMap<String, (f64, NaiveDate)> = BTreeMap::new();
    for log in logs {
        let Some(max_weight) = log.sets.iter().map(|set| set.weight).reduce(f64::max) else {
            continue;
        };
        match best.get(&log.workout) {
            Some((weight, _)) if max_weight <= *weight => {}
            _ => {
                best.insert(log.workout.clone(), (max_weight, log.date));
            }
        }
    }

    RecordsResponse {
        records: best
            .into_iter()
            .map(|(exercise, (weight, date))| BestRecord {
                exercise,
                weight,
                date,
            })
            .collect(),
    }
}

pub fn personal_record(logs: &[WorkoutLog], workout: &str) -> f64 {
    let needle = workout.trim().to_lowercase();
    let mut best = 0.0_f64;
    for log in logs {
        if !log.workout.to_lowercase().contains(&needle) {
            continue;
        }
        for set in &log.sets {
            if set.weight > best {
                best = set.weight;
            }
        }
    }
    best
}

/// The exercise after the most recently logged one in the plan, rolling
/// over to the next non-empty day at the end of a day's list.
pub fn next_workout(plan: &WeeklyPlan, logs: &[WorkoutLog]) -> Option<NextWorkout> {
    let candidates: Vec<_> = plan
        .days()
        .into_iter()
        .filter(|(_, day)| !day.exercises.is_empty())
        .collect();
    let (first_day, first_plan) = *candidates.first()?;

    let Some(last) = logs.iter().max_by_key(|log| log.logged_at) else {
        return Some(NextWorkout {
            day: first_day.to_string(),
            exercise: first_plan.exercises.first()?.clone(),
        });
    };

    for (index, (day, day_plan)) in candidates.iter().copied().enumerate() {
        let Some(position) = day_plan
            .exercises
            .iter()
            .position(|exercise| exercise.trim() == last.workout.trim())
        else {
            continue;
        };

        if let Some(exercise) = day_plan.exercises.get(position + 1) {
            return Some(NextWorkout {
                day: day.to_string(),
                exercise: exercise.clone(),
            });
        }

        let (next_day, next_plan) = candidates[(index + 1) % candidates.len()];
        return Some(NextWorkout {
            day: next_day.to_string(),
            exercise: next_plan.exercises.first()?.clone(),
        });
    }

    // Last logged workout is not in the plan; start over from the top.
    Some(NextWorkout {
        day: first_day.to_string(),
        exercise: first_plan.exercises.first()?.clone(),
    })
}
