pub mod admin;
pub mod auth;
pub mod user;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/send-verify-otp", post(auth::send_verify_otp))
        .route("/api/auth/verify-email", post(auth::verify_email))
        .route("/api/auth/is-auth", get(auth::is_auth))
        .route("/api/auth/send-reset-otp", post(auth::send_reset_otp))
        .route("/api/auth/reset-password", post(auth::reset_password))
        // User
        .route("/api/user/data", get(user::get_user_data))
        .route("/api/user/submit-feedback", post(user::submit_feedback))
        .route("/api/user/user-feedback", get(user::user_feedback))
        // Admin (admin or superadmin)
        .route("/api/admin/dashboard", get(admin::dashboard))
        .route("/api/admin/manage-users", get(admin::manage_users))
        .route("/api/admin/manage-admins", get(admin::manage_admins))
        .route("/api/admin/view-feedback", get(admin::view_feedback))
        .route("/api/admin/add-user", post(admin::add_user))
        .route("/api/admin/update-user/{user_id}", put(admin::update_user))
        .route(
            "/api/admin/delete-user/{user_id}",
            delete(admin::delete_user),
        )
        // Superadmin
        .route("/api/admin/super-dashboard", get(admin::super_dashboard))
        .route("/api/admin/create-admin", post(admin::create_admin))
        .route(
            "/api/admin/update-admin/{admin_id}",
            put(admin::update_admin),
        )
        .route(
            "/api/admin/delete-admin/{admin_id}",
            delete(admin::delete_admin),
        )
}
