use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::levels::LevelInfo;

pub const MAX_HEARTS: u8 = 4;
pub const MAX_SETS_PER_LOG: usize = 10;

/// The whole document tree, persisted as one JSON file. Uid keys are
/// BTreeMap keys, so every enumeration over users runs in uid order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: BTreeMap<String, UserSpace>,
    #[serde(default)]
    pub gyms: BTreeMap<String, Gym>,
    #[serde(default)]
    pub challenges: BTreeMap<String, Challenge>,
    #[serde(default)]
    pub leaderboard: BTreeMap<String, LeaderboardEntry>,
}

impl Database {
    pub fn user(&self, uid: &str) -> Option<&UserSpace> {
        self.users.get(uid)
    }

    pub fn user_mut(&mut self, uid: &str) -> &mut UserSpace {
        self.users.entry(uid.to_string()).or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSpace {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub plan: WeeklyPlan,
    #[serde(default)]
    pub daily_quest: Option<DailyQuest>,
    #[serde(default)]
    pub social: SocialDoc,
    #[serde(default)]
    pub achievements: AchievementsDoc,
    #[serde(default)]
    pub logs: BTreeMap<String, WorkoutLog>,
    #[serde(default)]
    pub goal: Option<Goal>,
}

impl UserSpace {
    /// Logs in insertion-independent, newest-first order.
    pub fn logs_newest_first(&self) -> Vec<(String, WorkoutLog)> {
        let mut logs: Vec<(String, WorkoutLog)> = self
            .logs
            .iter()
            .map(|(id, log)| (id.clone(), log.clone()))
            .collect();
        logs.sort_by(|a, b| b.1.logged_at.cmp(&a.1.logged_at));
        logs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub xp: u64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub streak: u32,
    #[serde(default = "default_hearts", deserialize_with = "lenient_hearts")]
    pub hearts: u8,
    #[serde(default)]
    pub last_log_date: Option<NaiveDate>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            xp: 0,
            streak: 0,
            hearts: MAX_HEARTS,
            last_log_date: None,
        }
    }
}

impl UserStats {
    pub fn hearts_display(&self) -> String {
        let full = self.hearts.min(MAX_HEARTS) as usize;
        let empty = (MAX_HEARTS as usize) - full;
        format!("{}{}", "❤️".repeat(full), "🖤".repeat(empty))
    }
}

fn default_hearts() -> u8 {
    MAX_HEARTS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub set: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub reps: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,
}

/// One logged workout. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub workout: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    #[serde(default)]
    pub notes: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuest {
    pub text: String,
    pub quote: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_special: bool,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialDoc {
    #[serde(default)]
    pub friends: BTreeSet<String>,
    #[serde(default)]
    pub sent_requests: BTreeSet<String>,
    #[serde(default)]
    pub received_requests: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub gym_name: String,
    #[serde(default)]
    pub gym_area: String,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub fav_music: String,
    #[serde(default)]
    pub fitness_goal: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkoutType {
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    Core,
    Cardio,
    #[default]
    Rest,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlan {
    #[serde(default)]
    pub monday: DayPlan,
    #[serde(default)]
    pub tuesday: DayPlan,
    #[serde(default)]
    pub wednesday: DayPlan,
    #[serde(default)]
    pub thursday: DayPlan,
    #[serde(default)]
    pub friday: DayPlan,
    #[serde(default)]
    pub saturday: DayPlan,
    #[serde(default)]
    pub sunday: DayPlan,
}

impl WeeklyPlan {
    pub fn days(&self) -> [(&'static str, &DayPlan); 7] {
        [
            ("Monday", &self.monday),
            ("Tuesday", &self.tuesday),
            ("Wednesday", &self.wednesday),
            ("Thursday", &self.thursday),
            ("Friday", &self.friday),
            ("Saturday", &self.saturday),
            ("Sunday", &self.sunday),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.days().iter().all(|(_, day)| day.exercises.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub goal_name: String,
    pub target_value: f64,
    pub current_value: f64,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gym {
    pub name: String,
    pub area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub goal: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub participants: u32,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementsDoc {
    #[serde(default)]
    pub unlocked: BTreeSet<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Denormalized ranking copy refreshed after each log action; never read
/// back as a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub xp: u64,
    pub streak: u32,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub workout: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub sets: Vec<SetRequest>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub reps: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub message: String,
    pub outcome: String,
    pub xp_gained: u64,
    pub xp: u64,
    pub streak: u32,
    pub hearts: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub username: String,
    pub xp: u64,
    pub streak: u32,
    pub hearts: u8,
    pub hearts_display: String,
    pub level: LevelInfo,
    pub next_workout: Option<NextWorkout>,
    pub quest: DailyQuest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NextWorkout {
    pub day: String,
    pub exercise: String,
}

#[derive(Debug, Serialize)]
pub struct LogView {
    pub id: String,
    pub workout: String,
    pub date: NaiveDate,
    pub sets: Vec<SetEntry>,
    pub notes: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub logs: Vec<LogView>,
}

#[derive(Debug, Serialize)]
pub struct QuestCompleteResponse {
    pub message: String,
    pub xp_gained: u64,
    pub heart_restored: bool,
    pub xp: u64,
    pub hearts: u8,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub birthday_today: bool,
}

#[derive(Debug, Serialize)]
pub struct UserCard {
    pub uid: String,
    pub username: String,
    pub xp: u64,
    pub streak: u32,
    pub relationship: String,
}

#[derive(Debug, Serialize)]
pub struct FriendsResponse {
    pub friends: Vec<UserCard>,
    pub received_requests: Vec<UserCard>,
}

#[derive(Debug, Deserialize)]
pub struct FriendRequestBody {
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub trained: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub days: Vec<CalendarDay>,
    pub total_gym_days: usize,
    pub window_days: usize,
}

#[derive(Debug, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub total_kg: f64,
}

#[derive(Debug, Serialize)]
pub struct VolumeResponse {
    pub points: Vec<VolumePoint>,
    pub improvement_kg: f64,
}

#[derive(Debug, Serialize)]
pub struct BestRecord {
    pub exercise: String,
    pub weight: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<BestRecord>,
}

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub unlocked: Vec<String>,
    pub newly_unlocked: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub workout: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_value: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub days: u32,
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    pub goal_name: String,
    pub target_value: f64,
    pub current_value: f64,
    pub progress_percent: f64,
    pub deadline: DateTime<Utc>,
    pub days_left: i64,
    pub hours_left: i64,
    pub expired: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddGymRequest {
    pub name: String,
    pub area: String,
}

#[derive(Debug, Serialize)]
pub struct GymView {
    pub id: String,
    pub name: String,
    pub area: String,
}

#[derive(Debug, Serialize)]
pub struct GymMembersResponse {
    pub gym_name: String,
    pub gym_area: String,
    pub members: Vec<UserCard>,
}

#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub title: String,
    pub goal: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct ChallengeView {
    pub id: String,
    pub title: String,
    pub goal: String,
    pub duration: String,
    pub participants: u32,
    pub created_by: String,
}

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Lenient decoding
//
// Stored documents and client forms both mix numbers with numeric strings;
// malformed or negative values coerce to zero instead of failing the whole
// document.
// ---------------------------------------------------------------------------

/// Lenient numeric policy for request and document fields: strings parse,
/// junk and non-positive values coerce to zero, nothing is rejected.
fn coerce_f64(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() && f > 0.0 => f,
        _ => 0.0,
    }
}

fn lenient_f64<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(coerce_f64(&value))
}

fn lenient_u64<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(coerce_f64(&value) as u64)
}

fn lenient_u32<'de, D>(de: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(coerce_f64(&value).min(u32::MAX as f64) as u32)
}

fn lenient_hearts<'de, D>(de: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    if value.is_null() {
        return Ok(MAX_HEARTS);
    }
    Ok((coerce_f64(&value) as u64).min(MAX_HEARTS as u64) as u8)
}
