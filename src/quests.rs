use chrono::NaiveDate;
use rand::Rng;

use crate::models::{DailyQuest, UserStats, MAX_HEARTS};

pub const SPECIAL_QUEST_CHANCE: f64 = 0.2;
pub const QUEST_XP: u64 = 10;
pub const SPECIAL_QUEST_XP: u64 = 20;
pub const SPECIAL_QUEST_PREFIX: &str = "🌟 SPECIAL QUEST: ";

const QUEST_POOL: [&str; 6] = [
    "Run 2 km today",
    "Do 3 sets of planks",
    "Stretch for 10 minutes",
    "Drink 3 litres of water",
    "Perform 100 squats",
    "Take a cold shower post-workout",
];

const QUOTE_POOL: [&str; 5] = [
    "No pain, no gain – but no rest, no growth either.",
    "Show up today for a stronger you tomorrow.",
    "Discipline beats motivation every time.",
    "If it doesn’t challenge you, it won’t change you.",
    "Small progress is still progress!",
];

pub fn roll_daily_quest(today: NaiveDate) -> DailyQuest {
    roll_daily_quest_with(&mut rand::thread_rng(), today)
}

pub fn roll_daily_quest_with<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> DailyQuest {
    let base = QUEST_POOL[rng.gen_range(0..QUEST_POOL.len())];
    let quote = QUOTE_POOL[rng.gen_range(0..QUOTE_POOL.len())];
    let is_special = rng.gen_bool(SPECIAL_QUEST_CHANCE);
    let text = if is_special {
        format!("{SPECIAL_QUEST_PREFIX}{base}")
    } else {
        base.to_string()
    };

    DailyQuest {
        text,
        quote: quote.to_string(),
        date: today,
        is_special,
        completed: false,
    }
}

/// A stored quest from any other day is stale and replaced by a fresh roll.
pub fn quest_for_today(existing: Option<DailyQuest>, today: NaiveDate) -> DailyQuest {
    match existing {
        Some(quest) if quest.date == today => quest,
        _ => roll_daily_quest(today),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestReward {
    pub xp_gained: u64,
    pub heart_restored: bool,
}

/// Grants the completion reward. Callers must have checked that the quest
/// is today's and not yet completed.
pub fn complete_quest(stats: &UserStats, quest: &DailyQuest) -> (UserStats, QuestReward) {
    let mut next = stats.clone();
    let xp_gained = if quest.is_special {
        SPECIAL_QUEST_XP
    } else {
        QUEST_XP
    };
    next.xp = next.xp.saturating_add(xp_gained);

    let heart_restored = quest.is_special && next.hearts < MAX_HEARTS;
    if heart_restored {
        next.hearts += 1;
    }

    (next, QuestReward {
        xp_gained,
        heart_restored,
    })
}
