//! Grouped donor counts behind `/api/types` and `/api/stats`.
//!
//! Both endpoints must always answer with JSON of the same shape. Live
//! aggregation is attempted first; when every candidate query fails the
//! response is a static sample dataset so the dashboard charts still render.

use std::{fmt::Debug, future::Future};

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};

/// One SQL statement that may answer a statistics request.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub label: &'static str,
    pub sql: &'static str,
}

pub const BLOOD_DAILY_CANDIDATES: [Candidate; 2] = [
    Candidate {
        label: "blood_donors.donated_at",
        sql: "SELECT to_char(donated_at::date, 'YYYY-MM-DD') AS donated_at, COUNT(*)::int AS count
              FROM blood_donors
              GROUP BY donated_at::date
              ORDER BY donated_at::date",
    },
    Candidate {
        label: "blood_donors.created_at",
        sql: "SELECT to_char(created_at::date, 'YYYY-MM-DD') AS donated_at, COUNT(*)::int AS count
              FROM blood_donors
              GROUP BY created_at::date
              ORDER BY created_at::date",
    },
];

pub const ORGAN_DAILY_CANDIDATES: [Candidate; 2] = [
    Candidate {
        label: "organ_donors.donated_at",
        sql: "SELECT to_char(donated_at::date, 'YYYY-MM-DD') AS donated_at, COUNT(*)::int AS count
              FROM organ_donors
              GROUP BY donated_at::date
              ORDER BY donated_at::date",
    },
    Candidate {
        label: "organ_donors.created_at",
        sql: "SELECT to_char(created_at::date, 'YYYY-MM-DD') AS donated_at, COUNT(*)::int AS count
              FROM organ_donors
              GROUP BY created_at::date
              ORDER BY created_at::date",
    },
];

const BLOOD_TYPES_SQL: &str = "SELECT COALESCE(blood_group, 'Unknown') AS type, COUNT(*)::int AS total
     FROM blood_donors
     GROUP BY blood_group
     ORDER BY total DESC";

const ORGAN_TYPES_SQL: &str = "SELECT COALESCE(organ, 'Unknown') AS type, COUNT(*)::int AS total
     FROM organ_donors
     GROUP BY organ
     ORDER BY total DESC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TypeTotal {
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DailyCount {
    pub donated_at: String,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypesResponse {
    pub blood_types: Vec<TypeTotal>,
    pub organ_types: Vec<TypeTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub blood_stats: Vec<DailyCount>,
    pub organ_stats: Vec<DailyCount>,
}

impl TypesResponse {
    pub fn fallback() -> Self {
        Self {
            blood_types: vec![
                type_total("A+", 40),
                type_total("B+", 20),
                type_total("O+", 15),
                type_total("AB+", 10),
                type_total("A-", 5),
            ],
            organ_types: vec![
                type_total("Kidney", 30),
                type_total("Heart", 20),
                type_total("Brain", 10),
            ],
        }
    }
}

impl StatsResponse {
    pub fn fallback() -> Self {
        Self {
            blood_stats: vec![
                daily("2025-10-24", 40),
                daily("2025-10-28", 2),
                daily("2025-10-29", 5),
                daily("2025-10-30", 0),
            ],
            organ_stats: vec![
                daily("2025-10-24", 5),
                daily("2025-10-28", 1),
                daily("2025-10-29", 10),
                daily("2025-10-30", 3),
            ],
        }
    }
}

fn type_total(kind: &str, total: i32) -> TypeTotal {
    TypeTotal {
        kind: kind.to_string(),
        total,
    }
}

fn daily(day: &str, count: i32) -> DailyCount {
    DailyCount {
        donated_at: day.to_string(),
        count,
    }
}

/// Runs candidates in order and returns the first successful result.
///
/// Failures are logged and skipped; `None` means every candidate failed.
pub async fn first_successful<T, E, F, Fut>(candidates: &[Candidate], mut run: F) -> Option<T>
where
    F: FnMut(Candidate) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Debug,
{
    for candidate in candidates.iter().copied() {
        match run(candidate).await {
            Ok(value) => {
                info!(source = candidate.label, "statistics query answered");
                return Some(value);
            }
            Err(err) => {
                warn!(?err, source = candidate.label, "statistics query failed");
            }
        }
    }
    None
}

/// Live data wins whenever at least one table answered; a silent table becomes empty.
pub fn assemble_stats(
    blood: Option<Vec<DailyCount>>,
    organ: Option<Vec<DailyCount>>,
) -> StatsResponse {
    if blood.is_none() && organ.is_none() {
        warn!("all statistics queries failed, serving sample data");
        return StatsResponse::fallback();
    }

    StatsResponse {
        blood_stats: blood.unwrap_or_default(),
        organ_stats: organ.unwrap_or_default(),
    }
}

pub async fn daily_stats(pool: &PgPool) -> StatsResponse {
    let blood = first_successful(&BLOOD_DAILY_CANDIDATES, |candidate| {
        fetch_daily(pool, candidate)
    })
    .await;
    let organ = first_successful(&ORGAN_DAILY_CANDIDATES, |candidate| {
        fetch_daily(pool, candidate)
    })
    .await;

    assemble_stats(blood, organ)
}

pub async fn type_totals(pool: &PgPool) -> TypesResponse {
    let blood = sqlx::query_as::<_, TypeTotal>(BLOOD_TYPES_SQL).fetch_all(pool);
    let organ = sqlx::query_as::<_, TypeTotal>(ORGAN_TYPES_SQL).fetch_all(pool);

    match tokio::try_join!(blood, organ) {
        Ok((blood_types, organ_types)) => TypesResponse {
            blood_types,
            organ_types,
        },
        Err(err) => {
            warn!(?err, "type aggregation failed, serving sample data");
            TypesResponse::fallback()
        }
    }
}

async fn fetch_daily(pool: &PgPool, candidate: Candidate) -> sqlx::Result<Vec<DailyCount>> {
    sqlx::query_as::<_, DailyCount>(candidate.sql)
        .fetch_all(pool)
        .await
}
