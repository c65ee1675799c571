use std::env;

use thiserror::Error;

pub const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";
pub const DEFAULT_NOTIFY_FROM: &str = "Contact Form <onboarding@resend.dev>";
pub const DEFAULT_CONFIRM_FROM: &str = "Portfolio <onboarding@resend.dev>";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("failed to build outbound HTTP client: {0}")]
    HttpClient(String),
}

/// Secrets and identities the contact handler needs at its boundary.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub resend_api_key: String,
    pub resend_api_base: String,
    pub owner_email: String,
    pub store_url: String,
    pub store_service_key: String,
    pub notify_from: String,
    pub confirm_from: String,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            resend_api_key: required("RESEND_API_KEY")?,
            owner_email: required("CONTACT_EMAIL")?,
            store_url: required("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            store_service_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            resend_api_base: get("RESEND_API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RESEND_API_BASE.to_string()),
            notify_from: get("CONTACT_NOTIFY_FROM")
                .unwrap_or_else(|| DEFAULT_NOTIFY_FROM.to_string()),
            confirm_from: get("CONTACT_CONFIRM_FROM")
                .unwrap_or_else(|| DEFAULT_CONFIRM_FROM.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("RESEND_API_KEY", "re_123".to_string()),
            ("CONTACT_EMAIL", "owner@example.com".to_string()),
            ("SUPABASE_URL", "https://proj.supabase.co/".to_string()),
            ("SUPABASE_SERVICE_ROLE_KEY", "service".to_string()),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let vars = base_env();
        let conf = ContactConfig::from_lookup(|k| vars.get(k).cloned()).expect("config");
        assert_eq!(conf.store_url, "https://proj.supabase.co");
        assert_eq!(conf.resend_api_base, DEFAULT_RESEND_API_BASE);
        assert_eq!(conf.notify_from, DEFAULT_NOTIFY_FROM);
        assert_eq!(conf.confirm_from, DEFAULT_CONFIRM_FROM);
    }

    #[test]
    fn test_missing_and_blank() {
        let mut vars = base_env();
        vars.remove("CONTACT_EMAIL");
        let err = ContactConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("CONTACT_EMAIL"));

        let mut vars = base_env();
        vars.insert("RESEND_API_KEY", "  ".to_string());
        let err = ContactConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("RESEND_API_KEY"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = base_env();
        vars.insert("RESEND_API_BASE", "http://localhost:9000/".to_string());
        vars.insert("CONTACT_CONFIRM_FROM", "Jane <hi@jane.dev>".to_string());
        let conf = ContactConfig::from_lookup(|k| vars.get(k).cloned()).expect("config");
        assert_eq!(conf.resend_api_base, "http://localhost:9000");
        assert_eq!(conf.confirm_from, "Jane <hi@jane.dev>");
    }
}
