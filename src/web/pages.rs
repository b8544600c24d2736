use axum::{extract::State, response::Html, response::Redirect};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::intake::FeedbackTone;
use crate::web::{
    AppState,
    auth::{self, viewer_name},
    templates,
};

pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_home(viewer_name(viewer.as_ref())))
}

pub async fn about(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_about(viewer_name(viewer.as_ref())))
}

pub async fn contact(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_contact(viewer_name(viewer.as_ref())))
}

pub async fn prerequisites(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_prerequisites(viewer_name(viewer.as_ref())))
}

pub async fn organ_prerequisites(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_organ_prerequisites(viewer_name(
        viewer.as_ref(),
    )))
}

pub async fn donate_organ(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_donate_organ(viewer_name(viewer.as_ref())))
}

pub async fn dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, Redirect> {
    let user = auth::require_user(&state, &jar).await?;
    debug!(user_id = %user.id, "dashboard viewed");
    Ok(Html(templates::render_dashboard(&user.name)))
}

pub async fn dashboard_stats(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_dashboard_stats(viewer_name(
        viewer.as_ref(),
    )))
}

pub async fn feedback_success(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_feedback_success(
        viewer_name(viewer.as_ref()),
        None,
        FeedbackTone::Standard,
    ))
}
