use sqlx::PgPool;

use super::models::{
    BloodDonorContactRow, BloodDonorRow, HospitalRow, NewBloodDonor, NewOrganDonor,
    NewOrganReceiver, OrganDonorRow,
};

pub async fn fetch_blood_donors(pool: &PgPool) -> sqlx::Result<Vec<BloodDonorRow>> {
    sqlx::query_as::<_, BloodDonorRow>(
        "SELECT name, blood_group FROM blood_donors ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_blood_donor_contacts(
    pool: &PgPool,
) -> sqlx::Result<Vec<BloodDonorContactRow>> {
    sqlx::query_as::<_, BloodDonorContactRow>(
        "SELECT name, blood_group, phone, address FROM blood_donors ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_blood_donor(pool: &PgPool, donor: &NewBloodDonor<'_>) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO blood_donors (name, email, dob, blood_group, phone, address)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(donor.name)
    .bind(donor.email)
    .bind(donor.dob)
    .bind(donor.blood_group)
    .bind(donor.phone)
    .bind(donor.address)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn count_blood_donors_in_group(pool: &PgPool, blood_group: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blood_donors WHERE blood_group = $1")
        .bind(blood_group)
        .fetch_one(pool)
        .await
}

pub async fn insert_organ_donor(pool: &PgPool, donor: &NewOrganDonor<'_>) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO organ_donors (name, email, dob, organ, phone, address, nearby_hospital)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(donor.name)
    .bind(donor.email)
    .bind(donor.dob)
    .bind(donor.organ)
    .bind(donor.phone)
    .bind(donor.address)
    .bind(donor.nearby_hospital)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn fetch_organ_donors(pool: &PgPool) -> sqlx::Result<Vec<OrganDonorRow>> {
    sqlx::query_as::<_, OrganDonorRow>(
        "SELECT name, organ, phone, nearby_hospital FROM organ_donors ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_hospitals_for_organ(
    pool: &PgPool,
    organ: &str,
) -> sqlx::Result<Vec<HospitalRow>> {
    sqlx::query_as::<_, HospitalRow>(
        "SELECT nearby_hospital AS hospital_name FROM organ_donors WHERE organ = $1",
    )
    .bind(organ)
    .fetch_all(pool)
    .await
}

pub async fn insert_organ_receiver(
    pool: &PgPool,
    receiver: &NewOrganReceiver<'_>,
) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO organ_receivers (name, email, phone, address, organ_needed, nearby_hospital)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(receiver.name)
    .bind(receiver.email)
    .bind(receiver.phone)
    .bind(receiver.address)
    .bind(receiver.organ_needed)
    .bind(receiver.nearby_hospital)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_query(pool: &PgPool, name: &str, email: &str, query: &str) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO queries (name, email, query) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(email)
        .bind(query)
        .execute(pool)
        .await?;
    Ok(())
}
