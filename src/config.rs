use crate::catalog::CONTACT_EMAIL;
use crate::core::language::Language;
use crate::error::ConfigurationError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Template default for the EmailJS service id
pub const PLACEHOLDER_SERVICE_ID: &str = "your_service_id";
/// Template default for the EmailJS template id
pub const PLACEHOLDER_TEMPLATE_ID: &str = "your_template_id";
/// Template default for the EmailJS public key
pub const PLACEHOLDER_PUBLIC_KEY: &str = "your_public_key";

/// Environment variable overriding `email.service_id`
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
/// Environment variable overriding `email.template_id`
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
/// Environment variable overriding `email.public_key`
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Contact-form delivery settings
    #[serde(default)]
    pub email: EmailConfig,
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Language to start in when no translation cookie is present
    #[serde(default)]
    pub language: Language,
}

/// EmailJS account settings for the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// Fixed destination for every submission
    #[serde(default = "default_to_email")]
    pub to_email: String,
    /// Send endpoint of the email service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Credentials that passed the placeholder check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_to_email() -> String {
    CONTACT_EMAIL.to_string()
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            to_email: default_to_email(),
            endpoint: default_endpoint(),
        }
    }
}

impl EmailConfig {
    /// Replace credential fields with any values set in the environment
    pub fn with_env_overrides(mut self) -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        if let Some(v) = read(ENV_SERVICE_ID) {
            self.service_id = Some(v);
        }
        if let Some(v) = read(ENV_TEMPLATE_ID) {
            self.template_id = Some(v);
        }
        if let Some(v) = read(ENV_PUBLIC_KEY) {
            self.public_key = Some(v);
        }
        self
    }

    /// Resolve the three credentials, rejecting blanks and template placeholders
    pub fn credentials(&self) -> Result<EmailCredentials, ConfigurationError> {
        Ok(EmailCredentials {
            service_id: check_credential("service_id", &self.service_id, PLACEHOLDER_SERVICE_ID)?,
            template_id: check_credential(
                "template_id",
                &self.template_id,
                PLACEHOLDER_TEMPLATE_ID,
            )?,
            public_key: check_credential("public_key", &self.public_key, PLACEHOLDER_PUBLIC_KEY)?,
        })
    }

    /// Whether all credentials are usable
    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }
}

fn check_credential(
    name: &'static str,
    value: &Option<String>,
    placeholder: &str,
) -> Result<String, ConfigurationError> {
    let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
        return Err(ConfigurationError::MissingCredential(name));
    };
    if value == placeholder {
        return Err(ConfigurationError::PlaceholderCredential {
            name,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: EmailConfig::default(),
            theme: default_theme(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            debug!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: the file may hold an API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.email.to_email, CONTACT_EMAIL);
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.email.service_id = Some("service_1".to_string());
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.email.service_id.as_deref(), Some("service_1"));
        assert_eq!(loaded.language, Language::En);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_each_placeholder_is_rejected() {
        let mut email = EmailConfig {
            service_id: Some("svc".to_string()),
            template_id: Some(PLACEHOLDER_TEMPLATE_ID.to_string()),
            public_key: Some("key".to_string()),
            ..EmailConfig::default()
        };
        assert_eq!(
            email.credentials(),
            Err(ConfigurationError::PlaceholderCredential {
                name: "template_id",
                value: PLACEHOLDER_TEMPLATE_ID.to_string()
            })
        );

        email.template_id = Some("tpl".to_string());
        email.public_key = Some("  ".to_string());
        assert_eq!(
            email.credentials(),
            Err(ConfigurationError::MissingCredential("public_key"))
        );

        email.public_key = Some("key".to_string());
        assert!(email.is_configured());
    }
}
