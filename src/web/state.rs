use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    config::Settings,
    notify::{Mailer, SmtpMailer},
};

#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
    mailer: Arc<dyn Mailer>,
    settings: Arc<Settings>,
}

impl AppState {
    pub async fn new(settings: Settings) -> Result<Self> {
        let mailer =
            SmtpMailer::from_settings(&settings.mail).context("failed to initialize SMTP mailer")?;

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&settings.database_url)
            .await
            .context("failed to connect to Postgres")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run database migrations")?;

        Ok(Self::from_parts(pool, Arc::new(mailer), settings))
    }

    pub fn from_parts(pool: PgPool, mailer: Arc<dyn Mailer>, settings: Settings) -> Self {
        Self {
            pool,
            mailer,
            settings: Arc::new(settings),
        }
    }

    pub fn pool_ref(&self) -> &PgPool {
        &self.pool
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
