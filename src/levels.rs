use serde::{Deserialize, Serialize};

/// Fixed-width levels: 0..199 is level 1, 200..399 is level 2, and so on.
pub const XP_PER_LEVEL: u64 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub badge: String,
    pub progress_percent: f64,
}

pub fn level_from_xp(xp: u64) -> LevelInfo {
    // Clamp rather than truncate: capped XP still maps to the top level.
    let level = u32::try_from(xp / XP_PER_LEVEL).map_or(u32::MAX, |n| n.saturating_add(1));
    let into_level = xp % XP_PER_LEVEL;
    LevelInfo {
        level,
        badge: badge_for_level(level).to_string(),
        progress_percent: into_level as f64 / XP_PER_LEVEL as f64 * 100.0,
    }
}

pub fn badge_for_level(level: u32) -> &'static str {
    match level {
        1 => "🥉 Bronze",
        2 => "🥈 Silver",
        3 => "🥇 Gold",
        _ => "💎 Platinum",
    }
}
