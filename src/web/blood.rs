use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{error, info};

use crate::intake::{self, Availability, INVALID_DOB, MISSING_FIELDS};
use crate::notify::messages;
use crate::web::{
    AppState,
    auth::{self, viewer_name},
    data,
    models::NewBloodDonor,
    responses::{PageError, notice},
    templates,
};

#[derive(Deserialize)]
pub struct BloodDonorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default, rename = "bloodGroup")]
    pub blood_group: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Deserialize)]
pub struct BloodRequestForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "bloodGroup")]
    pub blood_group: String,
}

pub async fn donor_list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, PageError> {
    let viewer = auth::current_user(&state, &jar).await;
    let donors = data::fetch_blood_donors(state.pool_ref())
        .await
        .map_err(|err| {
            error!(?err, "failed to fetch blood donors");
            PageError::internal("Error fetching donors")
        })?;

    Ok(Html(templates::render_donate_page(
        viewer_name(viewer.as_ref()),
        &donors,
    )))
}

pub async fn donor_form(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_blood_form(viewer_name(viewer.as_ref())))
}

pub async fn submit_donor_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BloodDonorForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let blood_group = form.blood_group.trim();
    let phone = form.phone.trim();
    let address = form.address.trim();

    if !intake::all_present(&[name, email, &form.dob, blood_group, phone, address]) {
        return notice(MISSING_FIELDS);
    }

    let Some(dob) = intake::parse_dob(&form.dob) else {
        return notice(INVALID_DOB);
    };

    let donor = NewBloodDonor {
        name,
        email,
        dob,
        blood_group,
        phone,
        address,
    };

    if let Err(err) = data::insert_blood_donor(state.pool_ref(), &donor).await {
        error!(?err, "failed to save blood donor");
        return PageError::internal("Error saving donor info").into_response();
    }
    info!(blood_group, "blood donor registered");

    // The row stays even if the confirmation cannot be delivered.
    if let Err(err) = state
        .mailer()
        .send(messages::blood_donation_confirmation(email, name))
        .await
    {
        error!(?err, "failed to send blood donation confirmation");
        return PageError::internal("Error saving donor info").into_response();
    }

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_donation_success(
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
    let donors = data::fetch_blood_donor_contacts(state.pool_ref())
        .await
        .map_err(|err| {
            error!(?err, "failed to load blood donors");
            PageError::internal("Error loading blood donors")
        })?;

    Ok(Html(templates::render_blood_receive_page(
        viewer_name(viewer.as_ref()),
        &donors,
    )))
}

/// Answers a blood request with a point-in-time availability check. Nothing is reserved.
pub async fn submit_request(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BloodRequestForm>,
) -> Response {
    let name = form.name.trim();
    let email = form.email.trim();
    let blood_group = form.blood_group.trim();

    if !intake::all_present(&[name, email, &form.phone, &form.address, blood_group]) {
        return notice(MISSING_FIELDS);
    }

    let donors = match data::count_blood_donors_in_group(state.pool_ref(), blood_group).await {
        Ok(count) => count,
        Err(err) => {
            error!(?err, "failed to count blood donors for request");
            return PageError::internal("Error processing blood request").into_response();
        }
    };
    let availability = Availability::from_count(donors);
    info!(blood_group, donors, "blood request checked");

    if let Err(err) = state
        .mailer()
        .send(messages::blood_request_received(
            email,
            name,
            blood_group,
            availability,
        ))
        .await
    {
        error!(?err, "failed to send blood request acknowledgement");
        return PageError::internal("Error processing blood request").into_response();
    }

    let viewer = auth::current_user(&state, &jar).await;
    Html(templates::render_receive_success(
        viewer_name(viewer.as_ref()),
        name,
        availability,
    ))
    .into_response()
}
