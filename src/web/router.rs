use axum::{
    Router,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::web::{AppState, api, auth, blood, contact, organ, pages};

pub const CONTENT_SECURITY_POLICY: &str = concat!(
    "default-src 'self'; ",
    "script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net https://www.gstatic.com https://cdnjs.cloudflare.com https://cdn.jsdelivr.net/npm https://cdn.jsdelivr.net/npm/chart.js; ",
    "style-src 'self' 'unsafe-inline' https://fonts.googleapis.com http://fonts.googleapis.com https://cdn.jsdelivr.net https://cdnjs.cloudflare.com; ",
    "font-src 'self' https://fonts.gstatic.com http://fonts.gstatic.com https://cdn.jsdelivr.net https://cdnjs.cloudflare.com data:; ",
    "connect-src 'self' https://www.gstatic.com https://dialogflow.cloud.google.com https://cdn.jsdelivr.net https://cdnjs.cloudflare.com; ",
    "frame-src 'self' https://www.gstatic.com https://dialogflow.cloud.google.com; ",
    "img-src 'self' data: https:; ",
    "object-src 'none';"
);

/// Headers set on every response, overriding anything a handler wrote.
pub const SECURITY_HEADERS: [(&str, &str); 11] = [
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Sent only in production, where the app is reached over HTTPS.
pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31536000; includeSubDomains";

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.settings().static_dir.clone();
    let assets_dir = state.settings().assets_dir.clone();
    let production = state.settings().production;

    let router = Router::new()
        .route("/", get(pages::home))
        .route("/signup", get(auth::signup_page).post(auth::process_signup))
        .route("/login", get(auth::login_page).post(auth::process_login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/dashboardstats", get(pages::dashboard_stats))
        .route("/donate", get(blood::donor_list))
        .route(
            "/donate/blood/form",
            get(blood::donor_form).post(blood::submit_donor_form),
        )
        .route(
            "/donate/receive",
            get(blood::receive_page).post(blood::submit_request),
        )
        .route("/donate/organ", get(pages::donate_organ))
        .route(
            "/donate/organ/form",
            get(organ::donor_form).post(organ::submit_donor_form),
        )
        .route(
            "/donate/organ/receive",
            get(organ::receive_page).post(organ::submit_request),
        )
        .route("/donate/organ/hospitals", get(organ::hospitals))
        .route("/prerequisites", get(pages::prerequisites))
        .route("/organPrerequisites", get(pages::organ_prerequisites))
        .route(
            "/queriesblood",
            get(contact::queries_page).post(contact::submit_query),
        )
        .route(
            "/feedback",
            get(contact::feedback_page).post(contact::submit_feedback),
        )
        .route("/feedbackSuccess", get(pages::feedback_success))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/api/types", get(api::donor_types))
        .route("/api/stats", get(api::donation_stats))
        .route("/healthz", get(healthz))
        .nest_service("/assests", ServeDir::new(assets_dir))
        .fallback_service(ServeDir::new(static_dir));

    with_security_headers(router, production).with_state(state)
}

fn with_security_headers(mut router: Router<AppState>, production: bool) -> Router<AppState> {
    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    if production {
        router = router.layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(STRICT_TRANSPORT_SECURITY),
        ));
    }

    router
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
