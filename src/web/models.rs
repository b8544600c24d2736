use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, FromRow)]
pub struct BloodDonorRow {
    pub name: String,
    pub blood_group: Option<String>,
}

#[derive(Clone, Debug, FromRow)]
pub struct BloodDonorContactRow {
    pub name: String,
    pub blood_group: Option<String>,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, FromRow)]
pub struct OrganDonorRow {
    pub name: String,
    pub organ: Option<String>,
    pub phone: String,
    pub nearby_hospital: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct HospitalRow {
    pub hospital_name: String,
}

pub struct NewBloodDonor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub dob: NaiveDate,
    pub blood_group: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
}

pub struct NewOrganDonor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub dob: NaiveDate,
    pub organ: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub nearby_hospital: &'a str,
}

pub struct NewOrganReceiver<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub organ_needed: &'a str,
    pub nearby_hospital: &'a str,
}
