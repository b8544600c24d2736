use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{error, info};

use crate::intake::{self, FeedbackTone, MISSING_FIELDS};
use crate::notify::messages;
use crate::web::{
    AppState,
    auth::{self, viewer_name},
    data,
    responses::{PageError, notice},
    templates,
};

#[derive(Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub query: String,
}

#[derive(Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rating: String,
}

pub async fn queries_page(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_queries_page(viewer_name(viewer.as_ref())))
}

pub async fn submit_query(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<QueryForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let query = form.query.trim();

    if !intake::all_present(&[name, email, query]) {
        return notice(MISSING_FIELDS);
    }

    if let Err(err) = data::insert_query(state.pool_ref(), name, email, query).await {
        error!(?err, "failed to save query");
        return PageError::internal("Error submitting query").into_response();
    }

    if let Err(err) = state
        .mailer()
        .send(messages::query_received(email, name))
        .await
    {
        error!(?err, "failed to send query acknowledgement");
        return PageError::internal("Error submitting query").into_response();
    }

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_queries_success(
        viewer_name(viewer.as_ref()),
        name,
        email,
    ))
    .into_response()
}

pub async fn feedback_page(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_feedback_page(viewer_name(viewer.as_ref())))
}

/// Forwards feedback to the operator mailbox; nothing is persisted.
pub async fn submit_feedback(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<FeedbackForm>,
) -> Response {
    let name = form.name.trim();
    let category = form.category.trim();
    let message = form.message.trim();
    let rating = form.rating.trim();

    if !intake::all_present(&[name, category, message, rating]) {
        return notice(MISSING_FIELDS);
    }

    let mailer = state.mailer();
    let email = messages::feedback_forward(
        mailer.operator_address(),
        name,
        category,
        rating,
        message,
    );
    if let Err(err) = mailer.send(email).await {
        error!(?err, "failed to forward feedback");
        return PageError::internal("Error submitting feedback").into_response();
    }

    let tone = FeedbackTone::from_rating(rating);
    info!(?tone, "feedback received");

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_feedback_success(
        viewer_name(viewer.as_ref()),
        Some(name),
        tone,
    ))
    .into_response()
}
