use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration as ChronoDuration, Utc};
use cookie::time::Duration as CookieDuration;
use rand_core::OsRng;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::intake::{MISSING_FIELDS, all_present};
use crate::web::{
    AppState,
    responses::{PageError, notice},
    templates,
};

pub const SESSION_COOKIE: &str = "lifenest_session";
pub const SESSION_TTL_HOURS: i64 = 24;

pub const EMAIL_TAKEN: &str = "Email already exists.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Clone, sqlx::FromRow)]
pub struct DbUserAuth {
    pub id: Uuid,
    pub name: String,
    pub password: String,
}

/// The signed-in user as resolved from the session cookie.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn signup_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, Redirect> {
    if current_user(&state, &jar).await.is_some() {
        return Err(Redirect::to("/dashboard"));
    }

    Ok(Html(templates::render_signup_page()))
}

pub async fn process_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    if !all_present(&[name, email, &form.password]) {
        return notice(MISSING_FIELDS);
    }

    let pool = state.pool_ref();
    match email_exists(pool, email).await {
        Ok(true) => return notice(EMAIL_TAKEN),
        Ok(false) => {}
        Err(err) => {
            error!(?err, "failed to check for existing user during signup");
            return PageError::internal("Server error during signup").into_response();
        }
    }

    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(err) => {
            error!(?err, "failed to hash password during signup");
            return PageError::internal("Server error during signup").into_response();
        }
    };

    match insert_user(pool, name, email, &password_hash).await {
        Ok(user_id) => {
            info!(%user_id, "registered new user");
            Redirect::to("/login").into_response()
        }
        Err(err) if is_unique_violation(&err) => notice(EMAIL_TAKEN),
        Err(err) => {
            error!(?err, "failed to insert user during signup");
            PageError::internal("Server error during signup").into_response()
        }
    }
}

pub async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, Redirect> {
    if current_user(&state, &jar).await.is_some() {
        return Err(Redirect::to("/dashboard"));
    }

    Ok(Html(templates::render_login_page()))
}

pub async fn process_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.trim();
    let pool = state.pool_ref();

    // Unknown email and wrong password share one reply.
    let user = match fetch_user_by_email(pool, email).await {
        Ok(Some(user)) => user,
        Ok(None) => return notice(INVALID_CREDENTIALS),
        Err(err) => {
            error!(?err, "failed to fetch user during login");
            return PageError::internal("Server error").into_response();
        }
    };

    if !verify_password(&form.password, &user.password) {
        warn!(user_id = %user.id, "login rejected");
        return notice(INVALID_CREDENTIALS);
    }

    let token = match create_session(pool, user.id).await {
        Ok(token) => token,
        Err(err) => {
            error!(?err, "failed to create session");
            return PageError::internal("Server error").into_response();
        }
    };

    info!(user_id = %user.id, name = %user.name, "user signed in");
    let jar = jar.add(session_cookie(token, state.settings().production));
    (jar, Redirect::to("/dashboard")).into_response()
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(token) = Uuid::parse_str(cookie.value()) {
            if let Err(err) = sqlx::query("DELETE FROM sessions WHERE id = $1")
                .bind(token)
                .execute(state.pool_ref())
                .await
            {
                error!(?err, "failed to remove session during logout");
            }
        }
    }

    (jar.remove(removal_cookie()), Redirect::to("/login"))
}

/// Resolves the session cookie to a user; lookup failures read as signed out.
pub async fn current_user(state: &AppState, jar: &CookieJar) -> Option<SessionUser> {
    let token_cookie = jar.get(SESSION_COOKIE)?;
    let token = Uuid::parse_str(token_cookie.value()).ok()?;

    match fetch_user_by_session(state.pool_ref(), token).await {
        Ok(user) => user,
        Err(err) => {
            error!(?err, "failed to resolve session");
            None
        }
    }
}

pub fn viewer_name(user: Option<&SessionUser>) -> Option<&str> {
    user.map(|user| user.name.as_str())
}

pub async fn require_user(state: &AppState, jar: &CookieJar) -> Result<SessionUser, Redirect> {
    current_user(state, jar)
        .await
        .ok_or_else(|| Redirect::to("/login"))
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed = PasswordHash::new(password_hash);
    match parsed {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(_) => false,
    }
}

pub fn session_cookie(token: Uuid, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.set_max_age(CookieDuration::hours(SESSION_TTL_HOURS));
    cookie
}

fn removal_cookie() -> Cookie<'static> {
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.set_http_only(true);
    removal.set_same_site(SameSite::Lax);
    removal.set_max_age(CookieDuration::seconds(0));
    removal
}

/// A concurrent signup can pass `email_exists` and still lose the race on the unique index.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

pub async fn email_exists(pool: &PgPool, email: &str) -> sqlx::Result<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn insert_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> sqlx::Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, name, email, password) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(id)
}

pub async fn fetch_user_by_email(pool: &PgPool, email: &str) -> sqlx::Result<Option<DbUserAuth>> {
    sqlx::query_as::<_, DbUserAuth>("SELECT id, name, password FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_user_by_session(pool: &PgPool, token: Uuid) -> sqlx::Result<Option<SessionUser>> {
    sqlx::query_as::<_, SessionUser>(
        "SELECT users.id, users.name FROM sessions JOIN users ON users.id = sessions.user_id WHERE sessions.id = $1 AND sessions.expires_at > NOW()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

async fn create_session(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Uuid> {
    let token = Uuid::new_v4();
    let expires_at = Utc::now() + ChronoDuration::hours(SESSION_TTL_HOURS);

    sqlx::query("INSERT INTO sessions (id, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;

    Ok(token)
}
