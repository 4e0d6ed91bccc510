use crate::models::{AchievementsDoc, UserStats};

/// Once unlocked, an achievement stays in the document even if the stats
/// later drop below its threshold.
const RULES: [(fn(&UserStats) -> bool, &str); 6] = [
    (|s| s.streak >= 3, "🔥 3-Day Streak"),
    (|s| s.streak >= 7, "💪 7-Day Warrior"),
    (|s| s.streak >= 30, "👑 30-Day Legend"),
    (|s| s.xp >= 100, "⚡ 100 XP Club"),
    (|s| s.xp >= 500, "💎 Platinum Grinder"),
    (|s| s.xp >= 1000, "🏆 Fitness Master"),
];

/// Returns the new unlocks in rule order.
pub fn evaluate(doc: &mut AchievementsDoc, stats: &UserStats) -> Vec<String> {
    let mut newly_unlocked = Vec::new();
    for (condition, name) in RULES {
        if condition(stats) && doc.unlocked.insert(name.to_string()) {
            newly_unlocked.push(name.to_string());
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_unlock_nothing() {
        let mut doc = AchievementsDoc::default();
        let new = evaluate(&mut doc, &UserStats::default());
        assert!(new.is_empty());
        assert!(doc.unlocked.is_empty());
    }

    #[test]
    fn thresholds_unlock_in_rule_order() {
        let mut doc = AchievementsDoc::default();
        let stats = UserStats {
            xp: 520,
            streak: 7,
            ..UserStats::default()
        };
        let new = evaluate(&mut doc, &stats);
        assert_eq!(
            new,
            vec![
                "🔥 3-Day Streak",
                "💪 7-Day Warrior",
                "⚡ 100 XP Club",
                "💎 Platinum Grinder",
            ]
        );
        assert_eq!(doc.unlocked.len(), 4);
    }

    #[test]
    fn already_unlocked_achievements_are_not_reported_again() {
        let mut doc = AchievementsDoc::default();
        let stats = UserStats {
            xp: 150,
            streak: 3,
            ..UserStats::default()
        };
        evaluate(&mut doc, &stats);

        let again = evaluate(&mut doc, &stats);
        assert!(again.is_empty());
        assert_eq!(doc.unlocked.len(), 2);
    }

    #[test]
    fn unlocks_survive_a_stats_reset() {
        let mut doc = AchievementsDoc::default();
        evaluate(&mut doc, &UserStats {
            xp: 1200,
            streak: 30,
            ..UserStats::default()
        });
        assert_eq!(doc.unlocked.len(), 6);

        let new = evaluate(&mut doc, &UserStats::default());
        assert!(new.is_empty());
        assert_eq!(doc.unlocked.len(), 6);
    }
}
