use std::{env, fmt, path::PathBuf};

use anyhow::{Context, Result, anyhow};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_ASSETS_DIR: &str = "assests";

/// Process-wide settings resolved once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub port: u16,
    pub production: bool,
    pub mail: MailSettings,
    pub static_dir: PathBuf,
    pub assets_dir: PathBuf,
}

/// SMTP relay credentials. `username` doubles as the sender and operator mailbox.
#[derive(Clone)]
pub struct MailSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow!("{key} env var is missing"))
        };

        let database_url = required("DATABASE_URL")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        let smtp_port = match lookup("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SMTP_PORT must be a valid port number, got `{raw}`"))?,
            None => DEFAULT_SMTP_PORT,
        };

        let production = lookup("APP_ENV")
            .map(|value| value.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let mail = MailSettings {
            host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: smtp_port,
            username: required("EMAIL_USER")?,
            password: required("EMAIL_PASS")?,
        };

        Ok(Self {
            database_url,
            port,
            production,
            mail,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/lifenest"),
            ("EMAIL_USER", "team@lifenest.test"),
            ("EMAIL_PASS", "secret"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 3000);
        assert!(!settings.production);
        assert_eq!(settings.mail.host, "smtp.gmail.com");
        assert_eq!(settings.mail.port, 465);
        assert_eq!(settings.static_dir, PathBuf::from("public"));
        assert_eq!(settings.assets_dir, PathBuf::from("assests"));
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/lifenest"),
            ("EMAIL_USER", "team@lifenest.test"),
            ("EMAIL_PASS", "secret"),
            ("PORT", "8081"),
            ("APP_ENV", "Production"),
            ("SMTP_HOST", "mail.example.org"),
            ("SMTP_PORT", "587"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 8081);
        assert!(settings.production);
        assert_eq!(settings.mail.host, "mail.example.org");
        assert_eq!(settings.mail.port, 587);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[
            ("EMAIL_USER", "team@lifenest.test"),
            ("EMAIL_PASS", "secret"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_bad_port() {
        let result = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/lifenest"),
            ("EMAIL_USER", "team@lifenest.test"),
            ("EMAIL_PASS", "secret"),
            ("PORT", "eighty"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_hides_password() {
        let mail = MailSettings {
            host: "smtp.gmail.com".into(),
            port: 465,
            username: "team@lifenest.test".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{mail:?}").contains("hunter2"));
    }
}
