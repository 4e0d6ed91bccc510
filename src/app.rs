use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/healthz", get(handlers::healthz))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/logs", post(handlers::create_log).get(handlers::get_logs))
        .route("/api/quest/complete", post(handlers::complete_quest))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route(
            "/api/profile",
            get(handlers::get_profile).put(handlers::put_profile),
        )
        .route("/api/plan", get(handlers::get_plan).put(handlers::put_plan))
        .route("/api/users", get(handlers::get_users))
        .route("/api/friends", get(handlers::get_friends))
        .route("/api/friends/:uid", delete(handlers::remove_friend))
        .route(
            "/api/friends/requests",
            post(handlers::send_friend_request),
        )
        .route(
            "/api/friends/requests/:uid",
            delete(handlers::cancel_friend_request),
        )
        .route(
            "/api/friends/requests/:uid/accept",
            post(handlers::accept_friend_request),
        )
        .route(
            "/api/friends/requests/:uid/reject",
            post(handlers::reject_friend_request),
        )
        .route("/api/stats/calendar", get(handlers::get_calendar))
        .route("/api/stats/volume", get(handlers::get_volume))
        .route("/api/stats/records", get(handlers::get_records))
        .route("/api/achievements", get(handlers::get_achievements))
        .route("/api/goal", get(handlers::get_goal).put(handlers::put_goal))
        .route("/api/gyms", get(handlers::get_gyms).post(handlers::add_gym))
        .route("/api/gym/members", get(handlers::get_gym_members))
        .route(
            "/api/challenges",
            get(handlers::get_challenges).post(handlers::create_challenge),
        )
        .route("/api/challenges/:id/join", post(handlers::join_challenge))
        .with_state(state)
}
