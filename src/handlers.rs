use crate::achievements;
use crate::auth::{authorize, Session};
use crate::errors::AppError;
use crate::leaderboard::{build_leaderboard, LeaderboardRow, RankedEntry, FALLBACK_USERNAME};
use crate::levels::level_from_xp;
use crate::models::{
    AchievementsResponse, AddGymRequest, CalendarResponse, Challenge, ChallengeView,
    CreateChallengeRequest, DashboardResponse, Database, FriendRequestBody, FriendsResponse,
    Goal, GoalRequest, GoalView, Gym, GymMembersResponse, GymView, HistoryResponse,
    LeaderboardEntry,
    LogRequest, LogResponse, LogView, Profile, ProfileResponse, QuestCompleteResponse,
    RecordsResponse, SetEntry, SocialDoc, StatusMessage, UserCard, UserSpace, VolumeResponse,
    WeeklyPlan, WorkoutLog, MAX_SETS_PER_LOG,
};
use crate::progression::{apply_log, classify_gap, xp_from_sets, LogOutcome};
use crate::quests;
use crate::social::{self, SocialError};
use crate::state::AppState;
use crate::stats::{build_calendar, build_records, build_volume, next_workout, personal_record};
use crate::storage::persist_or_rollback;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use uuid::Uuid;

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = authorize(&headers)?;
    let today = state.clock.today();

    let mut db = state.db.lock().await;
    let snapshot = db.clone();

    let is_new_user = !db.users.contains_key(&session.uid);
    let space = db.user_mut(&session.uid);

    let quest_was_stale = !matches!(&space.daily_quest, Some(q) if q.date == today);
    let quest = quests::quest_for_today(space.daily_quest.take(), today);
    space.daily_quest = Some(quest.clone());

    let username = display_username(&space.profile, &session);
    let user_stats = space.stats.clone();
    let logs: Vec<WorkoutLog> = space.logs.values().cloned().collect();
    let suggestion = next_workout(&space.plan, &logs);

    let response = DashboardResponse {
        username,
        xp: user_stats.xp,
        streak: user_stats.streak,
        hearts: user_stats.hearts,
        hearts_display: user_stats.hearts_display(),
        level: level_from_xp(user_stats.xp),
        next_workout: suggestion,
        quest,
    };

    // First sight of a user materializes their documents; a stale quest
    // re-rolls. Pure re-reads skip the disk write.
    if is_new_user || quest_was_stale {
        persist_or_rollback(&state.data_path, &mut db, snapshot).await?;
    }

    Ok(Json(response))
}

pub async fn create_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LogRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let session = authorize(&headers)?;

    let workout = payload.workout.trim().to_string();
    if workout.is_empty() {
        return Err(AppError::bad_request("Please select or enter a workout!"));
    }
    if payload.sets.is_empty() {
        return Err(AppError::bad_request("You must have at least 1 set!"));
    }
    if payload.sets.len() > MAX_SETS_PER_LOG {
        return Err(AppError::bad_request("😅 Max 10 sets allowed!"));
    }

    let today = state.clock.today();
    let xp_gain = xp_from_sets(&payload.sets);
    let sets: Vec<SetEntry> = payload
        .sets
        .iter()
        .enumerate()
        .map(|(index, set)| SetEntry {
            set: index as u32 + 1,
            reps: set.reps,
            weight: set.weight,
        })
        .collect();

    let mut db = state.db.lock().await;
    let snapshot = db.clone();

    let space = db.user_mut(&session.uid);
    space.logs.insert(
        Uuid::new_v4().to_string(),
        WorkoutLog {
            workout,
            date: payload.date.unwrap_or(today),
            sets,
            notes: payload.notes.trim().to_string(),
            logged_at: Utc::now(),
        },
    );

    let gap = classify_gap(space.stats.last_log_date, today);
    let (next_stats, outcome) = apply_log(&space.stats, gap, xp_gain, today);
    space.stats = next_stats.clone();

    let username = display_username(&space.profile, &session);
    db.leaderboard.insert(
        session.uid.clone(),
        LeaderboardEntry {
            username,
            xp: next_stats.xp,
            streak: next_stats.streak,
            updated_at: Utc::now(),
        },
    );

    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    let (message, outcome_label, xp_gained) = match outcome {
        LogOutcome::Logged => (
            format!(
                "✅ Workout logged! XP gained: +{xp_gain}. Streak: {} days!",
                next_stats.streak
            ),
            "logged",
            xp_gain,
        ),
        LogOutcome::HeartLost { hearts_left, .. } => (
            format!(
                "💔 Workout logged! You lost 1 heart ({hearts_left} remaining). XP gained: +{xp_gain}"
            ),
            "heart_lost",
            xp_gain,
        ),
        LogOutcome::FullReset => (
            "💀 All hearts lost! XP and streak reset. Fresh start!".to_string(),
            "full_reset",
            0,
        ),
    };

    Ok(Json(LogResponse {
        message,
        outcome: outcome_label.to_string(),
        xp_gained,
        xp: next_stats.xp,
        streak: next_stats.streak,
        hearts: next_stats.hearts,
    }))
}

pub async fn get_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let logs = match db.user(&session.uid) {
        Some(space) => space
            .logs_newest_first()
            .into_iter()
            .map(|(id, log)| LogView {
                id,
                workout: log.workout,
                date: log.date,
                sets: log.sets,
                notes: log.notes,
                logged_at: log.logged_at,
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(Json(HistoryResponse { logs }))
}

pub async fn complete_quest(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<QuestCompleteResponse>, AppError> {
    let session = authorize(&headers)?;
    let today = state.clock.today();

    let mut db = state.db.lock().await;
    let Some(quest) = db
        .user(&session.uid)
        .and_then(|space| space.daily_quest.clone())
        .filter(|q| q.date == today)
    else {
        return Err(AppError::not_found("No quest found for today."));
    };
    if quest.completed {
        return Err(AppError::conflict("🎯 You already completed today's quest!"));
    }

    let snapshot = db.clone();
    let space = db.user_mut(&session.uid);
    let (next_stats, reward) = quests::complete_quest(&space.stats, &quest);
    space.stats = next_stats.clone();
    if let Some(stored) = space.daily_quest.as_mut() {
        stored.completed = true;
    }

    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    let message = if reward.heart_restored {
        "🌟 Special Quest Complete! +1 ❤️ and +20 XP!"
    } else if quest.is_special {
        "🌟 Special Quest Complete! ❤️ Full, +20 XP!"
    } else {
        "🎯 Quest Completed! +10 XP!"
    };

    Ok(Json(QuestCompleteResponse {
        message: message.to_string(),
        xp_gained: reward.xp_gained,
        heart_restored: reward.heart_restored,
        xp: next_stats.xp,
        hearts: next_stats.hearts,
    }))
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RankedEntry>>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let rows: Vec<LeaderboardRow> = db
        .users
        .iter()
        .map(|(uid, space)| LeaderboardRow {
            uid: uid.clone(),
            username: resolve_username(&space.profile),
            xp: space.stats.xp,
            streak: space.stats.streak,
        })
        .collect();

    Ok(Json(build_leaderboard(
        rows,
        &session.uid,
        &session.display_name(),
    )))
}

pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = authorize(&headers)?;
    let today = state.clock.today();
    let db = state.db.lock().await;

    let profile = db
        .user(&session.uid)
        .map(|space| space.profile.clone())
        .unwrap_or_default();

    Ok(Json(ProfileResponse {
        birthday_today: is_birthday(&profile, today),
        profile,
    }))
}

pub async fn put_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Profile>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = authorize(&headers)?;
    let today = state.clock.today();

    let mut profile = payload;
    if profile.avatar.trim().is_empty() {
        profile.avatar = "avatar1.jpg".to_string();
    }

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    db.user_mut(&session.uid).profile = profile.clone();
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(ProfileResponse {
        birthday_today: is_birthday(&profile, today),
        profile,
    }))
}

pub async fn get_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<WeeklyPlan>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;
    let plan = db
        .user(&session.uid)
        .map(|space| space.plan.clone())
        .unwrap_or_default();
    Ok(Json(plan))
}

pub async fn put_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WeeklyPlan>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    db.user_mut(&session.uid).plan = payload;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: "✅ Plan saved successfully!".to_string(),
    }))
}

pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserCard>>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let my_social = db
        .user(&session.uid)
        .map(|space| space.social.clone())
        .unwrap_or_default();

    let cards = db
        .users
        .iter()
        .filter(|(uid, _)| uid.as_str() != session.uid)
        .map(|(uid, space)| user_card(uid, space, social::relationship(&my_social, uid)))
        .collect();

    Ok(Json(cards))
}

pub async fn get_friends(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<FriendsResponse>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let social_doc = db
        .user(&session.uid)
        .map(|space| space.social.clone())
        .unwrap_or_default();

    let friends = social_doc
        .friends
        .iter()
        .filter_map(|uid| db.user(uid).map(|space| user_card(uid, space, "friends")))
        .collect();
    let received_requests = social_doc
        .received_requests
        .iter()
        .filter_map(|uid| db.user(uid).map(|space| user_card(uid, space, "incoming")))
        .collect();

    Ok(Json(FriendsResponse {
        friends,
        received_requests,
    }))
}

pub async fn send_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FriendRequestBody>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;
    let to = payload.to.trim().to_string();

    let mut db = state.db.lock().await;
    let snapshot = db.clone();

    let Some(target) = db.user(&to) else {
        return Err(AppError::not_found("user not found"));
    };
    let target_name = resolve_username(&target.profile)
        .unwrap_or_else(|| FALLBACK_USERNAME.to_string());

    apply_social_op(&mut db, &session.uid, &to, |mine, theirs| {
        social::send_request(mine, theirs, &session.uid, &to)
    })?;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: format!("Friend request sent to {target_name}!"),
    }))
}

pub async fn cancel_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    apply_social_op(&mut db, &session.uid, &uid, |mine, theirs| {
        social::cancel_request(mine, theirs, &session.uid, &uid)
    })?;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: "Friend request cancelled.".to_string(),
    }))
}

pub async fn accept_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    apply_social_op(&mut db, &session.uid, &uid, |mine, theirs| {
        social::accept_request(mine, theirs, &session.uid, &uid)
    })?;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: "Friend request accepted!".to_string(),
    }))
}

pub async fn reject_friend_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    apply_social_op(&mut db, &session.uid, &uid, |mine, theirs| {
        social::reject_request(mine, theirs, &session.uid, &uid)
    })?;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: "Friend request rejected.".to_string(),
    }))
}

pub async fn remove_friend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uid): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    apply_social_op(&mut db, &session.uid, &uid, |mine, theirs| {
        social::remove_friend(mine, theirs, &session.uid, &uid)
    })?;
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(StatusMessage {
        message: "Friend removed.".to_string(),
    }))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CalendarResponse>, AppError> {
    let session = authorize(&headers)?;
    let today = state.clock.today();
    let db = state.db.lock().await;
    let logs = collect_logs(db.user(&session.uid));
    Ok(Json(build_calendar(&logs, today)))
}

pub async fn get_volume(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VolumeResponse>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;
    let logs = collect_logs(db.user(&session.uid));
    Ok(Json(build_volume(&logs)))
}

pub async fn get_records(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RecordsResponse>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;
    let logs = collect_logs(db.user(&session.uid));
    Ok(Json(build_records(&logs)))
}

pub async fn get_achievements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AchievementsResponse>, AppError> {
    let session = authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    let space = db.user_mut(&session.uid);

    let newly_unlocked = achievements::evaluate(&mut space.achievements, &space.stats);
    if !newly_unlocked.is_empty() {
        space.achievements.last_updated = Some(Utc::now());
    }
    let unlocked: Vec<String> = space.achievements.unlocked.iter().cloned().collect();

    if !newly_unlocked.is_empty() {
        persist_or_rollback(&state.data_path, &mut db, snapshot).await?;
    }

    Ok(Json(AchievementsResponse {
        unlocked,
        newly_unlocked,
    }))
}

pub async fn get_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GoalView>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let Some(goal) = db.user(&session.uid).and_then(|space| space.goal.clone()) else {
        return Err(AppError::not_found("no goal set"));
    };

    Ok(Json(goal_view(&goal)))
}

pub async fn put_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalView>, AppError> {
    let session = authorize(&headers)?;

    let workout = payload.workout.trim().to_string();
    if workout.is_empty() || payload.target_value <= 0.0 || payload.days == 0 {
        return Err(AppError::bad_request("Please fill all fields!"));
    }

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    let space = db.user_mut(&session.uid);

    let logs: Vec<WorkoutLog> = space.logs.values().cloned().collect();
    let goal = Goal {
        current_value: personal_record(&logs, &workout),
        goal_name: workout,
        target_value: payload.target_value,
        deadline: Utc::now() + Duration::days(payload.days as i64),
    };
    space.goal = Some(goal.clone());

    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(goal_view(&goal)))
}

pub async fn get_gyms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<GymView>>, AppError> {
    authorize(&headers)?;
    let db = state.db.lock().await;

    let gyms = db
        .gyms
        .iter()
        .map(|(id, gym)| GymView {
            id: id.clone(),
            name: gym.name.clone(),
            area: gym.area.clone(),
        })
        .collect();

    Ok(Json(gyms))
}

pub async fn add_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddGymRequest>,
) -> Result<Json<GymView>, AppError> {
    authorize(&headers)?;

    let name = payload.name.trim().to_string();
    let area = payload.area.trim().to_string();
    if name.is_empty() || area.is_empty() {
        return Err(AppError::bad_request("Please fill both fields."));
    }

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    let id = Uuid::new_v4().to_string();
    db.gyms.insert(
        id.clone(),
        Gym {
            name: name.clone(),
            area: area.clone(),
        },
    );
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(GymView { id, name, area }))
}

pub async fn get_gym_members(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GymMembersResponse>, AppError> {
    let session = authorize(&headers)?;
    let db = state.db.lock().await;

    let me = db.user(&session.uid);
    let profile = me.map(|space| space.profile.clone()).unwrap_or_default();
    if profile.gym_name.trim().is_empty() || profile.gym_area.trim().is_empty() {
        return Err(AppError::bad_request(
            "Please update your profile with your gym and area.",
        ));
    }
    let my_social = me.map(|space| space.social.clone()).unwrap_or_default();

    let mut members: Vec<UserCard> = db
        .users
        .iter()
        .filter(|(uid, _)| uid.as_str() != session.uid)
        .filter(|(_, space)| {
            space.profile.gym_name == profile.gym_name && space.profile.gym_area == profile.gym_area
        })
        .map(|(uid, space)| user_card(uid, space, social::relationship(&my_social, uid)))
        .collect();
    members.sort_by(|a, b| b.xp.cmp(&a.xp));

    Ok(Json(GymMembersResponse {
        gym_name: profile.gym_name,
        gym_area: profile.gym_area,
        members,
    }))
}

pub async fn get_challenges(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ChallengeView>>, AppError> {
    authorize(&headers)?;
    let db = state.db.lock().await;

    let challenges = db
        .challenges
        .iter()
        .map(|(id, challenge)| challenge_view(id, challenge))
        .collect();

    Ok(Json(challenges))
}

pub async fn create_challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateChallengeRequest>,
) -> Result<Json<ChallengeView>, AppError> {
    let session = authorize(&headers)?;

    let title = payload.title.trim().to_string();
    let goal = payload.goal.trim().to_string();
    if title.is_empty() || goal.is_empty() {
        return Err(AppError::bad_request("Please fill all fields!"));
    }
    let duration = match payload.duration.trim() {
        "" => "—".to_string(),
        text => text.to_string(),
    };

    let mut db = state.db.lock().await;
    let snapshot = db.clone();
    let id = Uuid::new_v4().to_string();
    let challenge = Challenge {
        title,
        goal,
        duration,
        participants: 0,
        created_by: session.display_name(),
    };
    db.challenges.insert(id.clone(), challenge.clone());
    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(challenge_view(&id, &challenge)))
}

pub async fn join_challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ChallengeView>, AppError> {
    authorize(&headers)?;

    let mut db = state.db.lock().await;
    let snapshot = db.clone();

    let Some(challenge) = db.challenges.get_mut(&id) else {
        return Err(AppError::not_found("challenge not found"));
    };
    challenge.participants = challenge.participants.saturating_add(1);
    let joined = challenge.clone();

    persist_or_rollback(&state.data_path, &mut db, snapshot).await?;

    Ok(Json(challenge_view(&id, &joined)))
}

fn apply_social_op<F>(
    db: &mut Database,
    my_uid: &str,
    their_uid: &str,
    op: F,
) -> Result<(), AppError>
where
    F: FnOnce(&mut SocialDoc, &mut SocialDoc) -> Result<(), SocialError>,
{
    if !db.users.contains_key(their_uid) {
        return Err(AppError::not_found("user not found"));
    }

    let mut mine = db.user_mut(my_uid).social.clone();
    let mut theirs = db.user_mut(their_uid).social.clone();
    op(&mut mine, &mut theirs).map_err(social_error)?;
    db.user_mut(my_uid).social = mine;
    db.user_mut(their_uid).social = theirs;
    Ok(())
}

fn social_error(err: SocialError) -> AppError {
    match err {
        SocialError::SelfReference => AppError::bad_request(err.to_string()),
        SocialError::AlreadyFriends | SocialError::AlreadyRequested => {
            AppError::conflict(err.to_string())
        }
        SocialError::NoPendingRequest | SocialError::NotFriends => {
            AppError::not_found(err.to_string())
        }
    }
}

fn resolve_username(profile: &Profile) -> Option<String> {
    let name = profile.username.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn display_username(profile: &Profile, session: &Session) -> String {
    resolve_username(profile).unwrap_or_else(|| session.display_name())
}

fn user_card(uid: &str, space: &UserSpace, relationship: &'static str) -> UserCard {
    UserCard {
        uid: uid.to_string(),
        username: resolve_username(&space.profile)
            .unwrap_or_else(|| FALLBACK_USERNAME.to_string()),
        xp: space.stats.xp,
        streak: space.stats.streak,
        relationship: relationship.to_string(),
    }
}

fn collect_logs(space: Option<&UserSpace>) -> Vec<WorkoutLog> {
    space
        .map(|s| s.logs.values().cloned().collect())
        .unwrap_or_default()
}

fn is_birthday(profile: &Profile, today: NaiveDate) -> bool {
    profile
        .dob
        .is_some_and(|dob| dob.month() == today.month() && dob.day() == today.day())
}

fn goal_view(goal: &Goal) -> GoalView {
    let remaining = goal.deadline - Utc::now();
    let expired = remaining <= Duration::zero();
    let (days_left, hours_left) = if expired {
        (0, 0)
    } else {
        (remaining.num_days(), remaining.num_hours() % 24)
    };

    let progress_percent = if goal.target_value > 0.0 {
        (goal.current_value / goal.target_value * 100.0).min(100.0)
    } else {
        0.0
    };

    GoalView {
        goal_name: goal.goal_name.clone(),
        target_value: goal.target_value,
        current_value: goal.current_value,
        progress_percent,
        deadline: goal.deadline,
        days_left,
        hours_left,
        expired,
    }
}

fn challenge_view(id: &str, challenge: &Challenge) -> ChallengeView {
    ChallengeView {
        id: id.to_string(),
        title: challenge.title.clone(),
        goal: challenge.goal.clone(),
        duration: challenge.duration.clone(),
        participants: challenge.participants,
        created_by: challenge.created_by.clone(),
    }
}
