use axum::{
    Json,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

use crate::intake::{self, INVALID_DOB, MISSING_FIELDS, UNDERAGE_ORGAN_DONOR};
use crate::notify::messages;
use crate::web::{
    AppState,
    auth::{self, viewer_name},
    data,
    models::{HospitalRow, NewOrganDonor, NewOrganReceiver},
    responses::{ApiMessage, PageError, json_error, notice},
    templates,
};

#[derive(Deserialize)]
pub struct OrganDonorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub organ: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "nearbyHospital")]
    pub nearby_hospital: String,
}

#[derive(Deserialize)]
pub struct OrganRequestForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "organNeeded")]
    pub organ_needed: String,
    #[serde(default, rename = "nearbyHospital")]
    pub nearby_hospital: String,
}

#[derive(Deserialize)]
pub struct HospitalQuery {
    #[serde(default)]
    pub organ: Option<String>,
}

pub async fn donor_form(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_organ_form(viewer_name(viewer.as_ref())))
}

pub async fn submit_donor_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<OrganDonorForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let organ = form.organ.trim();
    let phone = form.phone.trim();
    let address = form.address.trim();
    let nearby_hospital = form.nearby_hospital.trim();

    if !intake::all_present(&[
        name,
        email,
        &form.dob,
        organ,
        phone,
        address,
        nearby_hospital,
    ]) {
        return notice(MISSING_FIELDS);
    }

    let Some(dob) = intake::parse_dob(&form.dob) else {
        return notice(INVALID_DOB);
    };

    if !intake::is_eligible_organ_donor(dob, Utc::now().date_naive()) {
        info!("organ donor rejected as underage");
        return notice(UNDERAGE_ORGAN_DONOR);
    }

    let donor = NewOrganDonor {
        name,
        email,
        dob,
        organ,
        phone,
        address,
        nearby_hospital,
    };

    if let Err(err) = data::insert_organ_donor(state.pool_ref(), &donor).await {
        error!(?err, "failed to save organ donor");
        return PageError::internal("Error saving organ donor").into_response();
    }
    info!(organ, "organ donor registered");

    if let Err(err) = state
        .mailer()
        .send(messages::organ_donation_confirmation(email, name, organ))
        .await
    {
        error!(?err, "failed to send organ donation confirmation");
        return PageError::internal("Error saving organ donor").into_response();
    }

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_organ_success(
        viewer_name(viewer.as_ref()),
        name,
        email,
    ))
    .into_response()
}

pub async fn receive_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, PageError> {
    let viewer = auth::current_user(&state, &jar).await;
    let donors = data::fetch_organ_donors(state.pool_ref())
        .await
        .map_err(|err| {
            error!(?err, "failed to load organ donors");
            PageError::internal("Error loading organ donors")
        })?;

    Ok(Html(templates::render_organ_receive_page(
        viewer_name(viewer.as_ref()),
        &donors,
    )))
}

/// Records an organ request. Requests are never allocated to a donor here.
pub async fn submit_request(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<OrganRequestForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let receiver = NewOrganReceiver {
        name,
        email,
        phone: form.phone.trim(),
        address: form.address.trim(),
        organ_needed: form.organ_needed.trim(),
        nearby_hospital: form.nearby_hospital.trim(),
    };

    if !intake::all_present(&[
        receiver.name,
        receiver.email,
        receiver.phone,
        receiver.address,
        receiver.organ_needed,
        receiver.nearby_hospital,
    ]) {
        return notice(MISSING_FIELDS);
    }

    if let Err(err) = data::insert_organ_receiver(state.pool_ref(), &receiver).await {
        error!(?err, "failed to save organ receiver");
        return PageError::internal("Error saving organ receiver").into_response();
    }
    info!(organ_needed = receiver.organ_needed, "organ request registered");

    if let Err(err) = state
        .mailer()
        .send(messages::organ_receiver_confirmation(
            email,
            name,
            receiver.organ_needed,
        ))
        .await
    {
        error!(?err, "failed to send organ receiver confirmation");
        return PageError::internal("Error saving organ receiver").into_response();
    }

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_organ_receive_success(
        viewer_name(viewer.as_ref()),
        name,
        email,
    ))
    .into_response()
}

pub async fn hospitals(
    State(state): State<AppState>,
    Query(query): Query<HospitalQuery>,
) -> Result<Json<Vec<HospitalRow>>, (StatusCode, Json<ApiMessage>)> {
    let organ = query.organ.unwrap_or_default();

    data::fetch_hospitals_for_organ(state.pool_ref(), organ.trim())
        .await
        .map(Json)
        .map_err(|err| {
            error!(?err, organ = %organ, "failed to fetch hospitals");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        })
}
