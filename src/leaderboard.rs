use serde::Serialize;

pub const FALLBACK_USERNAME: &str = "Unknown User";

/// One user's resolved standing before ranking. Callers hand rows over in
/// uid order; the sort is stable, so XP ties keep that order.
#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub uid: String,
    pub username: Option<String>,
    pub xp: u64,
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub rank_label: String,
    pub uid: String,
    pub username: String,
    pub xp: u64,
    pub streak: u32,
    pub is_me: bool,
}

/// The requester always appears exactly once, synthesized with a zeroed
/// standing when absent from `rows`.
pub fn build_leaderboard(
    mut rows: Vec<LeaderboardRow>,
    requester_uid: &str,
    requester_name: &str,
) -> Vec<RankedEntry> {
    if !rows.iter().any(|row| row.uid == requester_uid) {
        rows.push(LeaderboardRow {
            uid: requester_uid.to_string(),
            username: Some(requester_name.to_string()),
            xp: 0,
            streak: 0,
        });
    }

    rows.sort_by(|a, b| b.xp.cmp(&a.xp));

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let is_me = row.uid == requester_uid;
            RankedEntry {
                rank: index as u32 + 1,
                rank_label: rank_label(index),
                uid: row.uid,
                username: row
                    .username
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_USERNAME.to_string()),
                xp: row.xp,
                streak: row.streak,
                is_me,
            }
        })
        .collect()
}

fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("#{}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(uid: &str, username: Option<&str>, xp: u64) -> LeaderboardRow {
        LeaderboardRow {
            uid: uid.to_string(),
            username: username.map(str::to_string),
            xp,
            streak: 0,
        }
    }

    #[test]
    fn ranks_sort_by_xp_descending() {
        let rows = vec![
            row("a", Some("Alice"), 50),
            row("b", Some("Bob"), 200),
            row("c", Some("Cara"), 120),
        ];
        let board = build_leaderboard(rows, "a", "Alice");
        let names: Vec<&str> = board.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Cara", "Alice"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn ties_keep_uid_order() {
        let rows = vec![
            row("a", Some("Alice"), 100),
            row("b", Some("Bob"), 100),
            row("c", Some("Cara"), 100),
        ];
        let board = build_leaderboard(rows, "b", "Bob");
        let uids: Vec<&str> = board.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_username_falls_back() {
        let rows = vec![row("a", None, 10), row("b", Some("   "), 5)];
        let board = build_leaderboard(rows, "a", "Me");
        assert_eq!(board[0].username, FALLBACK_USERNAME);
        assert_eq!(board[1].username, FALLBACK_USERNAME);
    }

    #[test]
    fn requester_is_synthesized_when_absent() {
        let rows = vec![row("a", Some("Alice"), 80)];
        let board = build_leaderboard(rows, "zed", "Zed");
        assert_eq!(board.len(), 2);
        let me = board.iter().find(|e| e.is_me).unwrap();
        assert_eq!(me.username, "Zed");
        assert_eq!(me.xp, 0);
        assert_eq!(me.rank, 2);
    }

    #[test]
    fn requester_is_not_duplicated_when_present() {
        let rows = vec![row("a", Some("Alice"), 80), row("b", Some("Bob"), 40)];
        let board = build_leaderboard(rows, "a", "Alice");
        assert_eq!(board.len(), 2);
        assert_eq!(board.iter().filter(|e| e.is_me).count(), 1);
        assert_eq!(board[0].xp, 80);
    }

    #[test]
    fn top_three_get_medals_then_numbered_ranks() {
        let rows = vec![
            row("a", Some("A"), 400),
            row("b", Some("B"), 300),
            row("c", Some("C"), 200),
            row("d", Some("D"), 100),
        ];
        let board = build_leaderboard(rows, "a", "A");
        let labels: Vec<&str> = board.iter().map(|e| e.rank_label.as_str()).collect();
        assert_eq!(labels, vec!["🥇", "🥈", "🥉", "#4"]);
    }
}
