//! SDK configuration.
//!
//! Settings come from a key/value properties source:
//!
//! ```text
//! desk.api.hostname = support.example.com
//! desk.api.token = 0123456789abcdef
//! desk.contact.us.email.address = support@example.com
//! desk.contact.us.subject.enabled = false
//! desk.contact.us.email.address.42 = help@brand42.example.com
//! ```
//!
//! A trailing numeric segment on a contact-us key scopes the value to that
//! brand. Overrides are split out once while parsing; lookups go through
//! [`DeskConfig::contact_us`] and never build keys at runtime.

mod contact_us;
mod properties;

pub use contact_us::{BrandOverrides, ContactUsConfig};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

pub const HOSTNAME_KEY: &str = "desk.api.hostname";
pub const TOKEN_KEY: &str = "desk.api.token";

const CALL_ENABLED_KEY: &str = "desk.contact.us.call.enabled";
const WEB_FORM_ENABLED_KEY: &str = "desk.contact.us.web.form.enabled";
const SUBJECT_ENABLED_KEY: &str = "desk.contact.us.subject.enabled";
const NAME_ENABLED_KEY: &str = "desk.contact.us.name.enabled";
const EMAIL_ADDRESS_KEY: &str = "desk.contact.us.email.address";
const PHONE_NUMBER_KEY: &str = "desk.contact.us.phone.number";
const DEFAULT_SUBJECT_KEY: &str = "desk.contact.us.subject";
const CUSTOM_FIELD_PREFIX: &str = "desk.contact.us.custom.field.";

/// Environment variable overriding [`HOSTNAME_KEY`].
pub const HOSTNAME_ENV: &str = "DESK_API_HOSTNAME";
/// Environment variable overriding [`TOKEN_KEY`].
pub const TOKEN_ENV: &str = "DESK_API_TOKEN";
/// Environment variable pointing at a properties file.
pub const CONFIG_PATH_ENV: &str = "DESK_CONFIG";

/// Top-level SDK configuration.
///
/// # Example
///
/// ```ignore
/// use desk_sdk::config::{ContactUsConfig, DeskConfig};
///
/// let config = DeskConfig::new("support.example.com", "token")
///     .with_contact_us(ContactUsConfig::new().with_subject_enabled(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Host name, or a full `http(s)://` base URL.
    pub hostname: String,
    pub api_token: String,
    /// Global contact-us options.
    pub contact_us: ContactUsConfig,
    brand_overrides: HashMap<u64, BrandOverrides>,
}

impl DeskConfig {
    pub fn new(hostname: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            api_token: api_token.into(),
            contact_us: ContactUsConfig::default(),
            brand_overrides: HashMap::new(),
        }
    }

    pub fn with_contact_us(mut self, contact_us: ContactUsConfig) -> Self {
        self.contact_us = contact_us;
        self
    }

    pub fn with_brand_overrides(mut self, brand_id: u64, overrides: BrandOverrides) -> Self {
        self.brand_overrides.insert(brand_id, overrides);
        self
    }

    /// Parse a properties document. Hostname and token are required.
    pub fn from_properties(source: &str) -> Result<Self, ConfigError> {
        ParsedProperties::parse(source)?.finish()
    }

    /// Load a properties file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ParsedProperties::read(path.as_ref())?.finish()
    }

    /// Load from `$DESK_CONFIG` or [`DeskConfig::default_path`], then apply
    /// `$DESK_API_HOSTNAME` / `$DESK_API_TOKEN`.
    ///
    /// A missing file is fine as long as the environment supplies both
    /// required values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_path()?,
        };
        Self::from_path_and_env(&path)
    }

    /// Like [`DeskConfig::from_env`] with an explicit file path.
    pub fn from_path_and_env(path: &Path) -> Result<Self, ConfigError> {
        let mut parsed = if path.exists() {
            ParsedProperties::read(path)?
        } else {
            debug!("No config file at {:?}, using environment only", path);
            ParsedProperties::default()
        };

        if let Some(hostname) = non_empty_env(HOSTNAME_ENV) {
            parsed.hostname = Some(hostname);
        }
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            parsed.api_token = Some(token);
        }

        parsed.finish()
    }

    /// `<config dir>/desk/desk.properties`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("desk").join("desk.properties"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Base URL for API requests, without a trailing slash.
    pub fn base_url(&self) -> String {
        let host = self.hostname.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Contact-us options for a brand, falling back to the global values.
    /// Brand `0` means "all brands" and always yields the global options.
    pub fn contact_us(&self, brand_id: u64) -> ContactUsConfig {
        match self.brand_overrides.get(&brand_id) {
            Some(overrides) if brand_id != 0 => self.contact_us.merged(overrides),
            _ => self.contact_us.clone(),
        }
    }

    pub fn brand_overrides(&self, brand_id: u64) -> Option<&BrandOverrides> {
        self.brand_overrides.get(&brand_id)
    }

    /// Brands that have at least one override, ascending.
    pub fn brand_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.brand_overrides.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Intermediate result of reading a properties source.
#[derive(Debug, Default)]
struct ParsedProperties {
    hostname: Option<String>,
    api_token: Option<String>,
    contact_us: ContactUsConfig,
    brand_overrides: HashMap<u64, BrandOverrides>,
}

/// Which contact-us setting a key addresses.
enum ContactKey {
    CallEnabled,
    WebFormEnabled,
    SubjectEnabled,
    NameEnabled,
    EmailAddress,
    PhoneNumber,
    DefaultSubject,
    CustomField(String),
}

impl ContactKey {
    fn lookup(key: &str) -> Option<Self> {
        Some(match key {
            CALL_ENABLED_KEY => Self::CallEnabled,
            WEB_FORM_ENABLED_KEY => Self::WebFormEnabled,
            SUBJECT_ENABLED_KEY => Self::SubjectEnabled,
            NAME_ENABLED_KEY => Self::NameEnabled,
            EMAIL_ADDRESS_KEY => Self::EmailAddress,
            PHONE_NUMBER_KEY => Self::PhoneNumber,
            DEFAULT_SUBJECT_KEY => Self::DefaultSubject,
            _ => {
                let name = key.strip_prefix(CUSTOM_FIELD_PREFIX)?;
                if name.is_empty() {
                    return None;
                }
                Self::CustomField(name.to_string())
            }
        })
    }
}

impl ParsedProperties {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut parsed = Self::default();

        for prop in properties::parse(source)? {
            match prop.key.as_str() {
                HOSTNAME_KEY => parsed.hostname = non_empty(&prop.value),
                TOKEN_KEY => parsed.api_token = non_empty(&prop.value),
                key => {
                    // A numeric last segment is a brand id, even under the
                    // custom-field prefix.
                    if let Some((setting, brand_id)) = split_brand_suffix(key) {
                        if brand_id == 0 {
                            return Err(ConfigError::InvalidValue {
                                key: prop.key.clone(),
                                value: prop.value,
                                reason: "brand 0 is reserved for all brands".to_string(),
                            });
                        }
                        let overrides = parsed.brand_overrides.entry(brand_id).or_default();
                        apply_override(overrides, setting, &prop.key, &prop.value)?;
                    } else if let Some(setting) = ContactKey::lookup(key) {
                        parsed.apply_global(setting, &prop.key, &prop.value)?;
                    } else {
                        debug!("Ignoring unknown configuration key '{}' (line {})", key, prop.line);
                    }
                }
            }
        }

        Ok(parsed)
    }

    fn apply_global(&mut self, setting: ContactKey, key: &str, value: &str) -> Result<(), ConfigError> {
        let contact = &mut self.contact_us;
        match setting {
            ContactKey::CallEnabled => contact.call_enabled = properties::parse_bool(key, value)?,
            ContactKey::WebFormEnabled => {
                contact.web_form_enabled = properties::parse_bool(key, value)?
            }
            ContactKey::SubjectEnabled => {
                contact.subject_enabled = properties::parse_bool(key, value)?
            }
            ContactKey::NameEnabled => contact.name_enabled = properties::parse_bool(key, value)?,
            ContactKey::EmailAddress => contact.email_address = non_empty(value),
            ContactKey::PhoneNumber => contact.phone_number = non_empty(value),
            ContactKey::DefaultSubject => contact.default_subject = non_empty(value),
            ContactKey::CustomField(name) => {
                contact.custom_fields.insert(name, value.to_string());
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<DeskConfig, ConfigError> {
        let hostname = self.hostname.ok_or_else(|| ConfigError::MissingKey {
            key: HOSTNAME_KEY.to_string(),
        })?;
        let api_token = self.api_token.ok_or_else(|| ConfigError::MissingKey {
            key: TOKEN_KEY.to_string(),
        })?;

        Ok(DeskConfig {
            hostname,
            api_token,
            contact_us: self.contact_us,
            brand_overrides: self.brand_overrides,
        })
    }
}

/// `desk.contact.us.email.address.42` -> (EmailAddress, 42).
fn split_brand_suffix(key: &str) -> Option<(ContactKey, u64)> {
    let (base, suffix) = key.rsplit_once('.')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let brand_id = suffix.parse().ok()?;
    ContactKey::lookup(base).map(|setting| (setting, brand_id))
}

fn apply_override(
    overrides: &mut BrandOverrides,
    setting: ContactKey,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match setting {
        ContactKey::CallEnabled => overrides.call_enabled = Some(properties::parse_bool(key, value)?),
        ContactKey::WebFormEnabled => {
            overrides.web_form_enabled = Some(properties::parse_bool(key, value)?)
        }
        ContactKey::SubjectEnabled => {
            overrides.subject_enabled = Some(properties::parse_bool(key, value)?)
        }
        ContactKey::NameEnabled => overrides.name_enabled = Some(properties::parse_bool(key, value)?),
        ContactKey::EmailAddress => overrides.email_address = non_empty(value),
        ContactKey::PhoneNumber => overrides.phone_number = non_empty(value),
        ContactKey::DefaultSubject => overrides.default_subject = non_empty(value),
        ContactKey::CustomField(name) => {
            overrides.custom_fields.insert(name, value.to_string());
        }
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}
