//! # Configuration Management
//!
//! Runtime parameters for the login and character servers.
//!
//! The configuration is an explicit value built once at startup and passed
//! to whatever needs it; there is no global instance.
//!
//! ## Configuration Sources
//! - The legacy JSON file (`login_config.json`) with PascalCase keys
//! - TOML files with the same keys via `from_toml()`
//! - Direct instantiation with defaults
//!
//! Ports may be given as numbers or as strings, since older configuration
//! files quote them.

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;

/// Default configuration file name
pub const CONFIG_FILE: &str = "login_config.json";

pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_LOGIN_PORT: u16 = 12000;
pub const DEFAULT_CHARACTER_PORT: u16 = 12001;
pub const DEFAULT_DB_PORT: u16 = 3306;

/// How much gets logged. Lower numbers are more severe; a configured
/// priority lets through everything at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "i64", into = "u8")]
#[repr(u8)]
pub enum LogPriority {
    Critical = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl From<u8> for LogPriority {
    // Anything out of range still lets critical messages through
    fn from(value: u8) -> Self {
        match value {
            2 => LogPriority::High,
            3 => LogPriority::Medium,
            4 => LogPriority::Low,
            _ => LogPriority::Critical,
        }
    }
}

impl From<i64> for LogPriority {
    fn from(value: i64) -> Self {
        match u8::try_from(value) {
            Ok(byte) => Self::from(byte),
            Err(_) => LogPriority::Critical,
        }
    }
}

impl From<LogPriority> for u8 {
    fn from(priority: LogPriority) -> Self {
        priority as u8
    }
}

impl LogPriority {
    /// Most verbose tracing level this priority admits
    pub fn level(self) -> Level {
        match self {
            LogPriority::Critical => Level::ERROR,
            LogPriority::High => Level::WARN,
            LogPriority::Medium => Level::INFO,
            LogPriority::Low => Level::DEBUG,
        }
    }
}

/// Login and character server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address advertised to clients in redirect packets
    #[serde(rename = "Hostname")]
    pub hostname: String,

    #[serde(rename = "LoginPort", with = "port_serde")]
    pub login_port: u16,

    #[serde(rename = "CharacterPort", with = "port_serde")]
    pub character_port: u16,

    #[serde(rename = "DBHost")]
    pub db_host: String,

    #[serde(rename = "DBPort", with = "port_serde")]
    pub db_port: u16,

    #[serde(rename = "DBName")]
    pub db_name: String,

    #[serde(rename = "DBUsername")]
    pub db_username: String,

    #[serde(rename = "DBPassword")]
    pub db_password: String,

    /// Log file path; standard out when unset
    #[serde(rename = "Logfile")]
    pub logfile: Option<String>,

    #[serde(rename = "LogLevel")]
    pub log_level: LogPriority,

    #[serde(rename = "DebugMode")]
    pub debug_mode: bool,

    #[serde(skip)]
    host_bytes: OnceLock<[u8; 4]>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: String::from(DEFAULT_HOSTNAME),
            login_port: DEFAULT_LOGIN_PORT,
            character_port: DEFAULT_CHARACTER_PORT,
            db_host: String::from("127.0.0.1"),
            db_port: DEFAULT_DB_PORT,
            db_name: String::new(),
            db_username: String::new(),
            db_password: String::new(),
            logfile: None,
            log_level: LogPriority::Critical,
            debug_mode: false,
            host_bytes: OnceLock::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a file. `.toml` files are parsed as TOML,
    /// anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ProtocolError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_json(&contents),
        }
    }

    /// Load configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse JSON: {e}")))?;
        config.enforce_defaults();
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))?;
        config.enforce_defaults();
        Ok(config)
    }

    /// Fill in values that are optional in the file but required at runtime.
    pub fn enforce_defaults(&mut self) {
        if self.hostname.trim().is_empty() {
            self.set_hostname(DEFAULT_HOSTNAME);
        }
        if self.login_port == 0 {
            self.login_port = DEFAULT_LOGIN_PORT;
        }
        if self.character_port == 0 {
            self.character_port = DEFAULT_CHARACTER_PORT;
        }
        if self.logfile.as_deref().is_some_and(|f| f.trim().is_empty()) {
            self.logfile = None;
        }
    }

    /// Change the advertised hostname, discarding any cached address bytes.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
        self.host_bytes = OnceLock::new();
    }

    /// The hostname as four address bytes for redirect packets.
    ///
    /// Parsed on first use and cached for the lifetime of this value.
    pub fn hostname_bytes(&self) -> Result<[u8; 4]> {
        if let Some(bytes) = self.host_bytes.get() {
            return Ok(*bytes);
        }
        let addr: Ipv4Addr = self.hostname.trim().parse().map_err(|_| {
            ProtocolError::ConfigError(format!(
                "Hostname '{}' is not an IPv4 address",
                self.hostname
            ))
        })?;
        Ok(*self.host_bytes.get_or_init(|| addr.octets()))
    }

    /// Connection URL for the character datastore.
    pub fn dsn(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_username, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// Tracing level implied by the priority and debug flag
    pub fn tracing_level(&self) -> Level {
        if self.debug_mode {
            Level::TRACE
        } else {
            self.log_level.level()
        }
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        serde_json::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("{}"))
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.hostname.trim().parse::<Ipv4Addr>().is_err() {
            errors.push(format!(
                "Invalid hostname: '{}' (expected an IPv4 address such as '127.0.0.1')",
                self.hostname
            ));
        }

        if self.login_port == 0 {
            errors.push("Login port must be greater than 0".to_string());
        }
        if self.character_port == 0 {
            errors.push("Character port must be greater than 0".to_string());
        }
        if self.login_port != 0 && self.login_port == self.character_port {
            errors.push(format!(
                "Login and character servers cannot share port {}",
                self.login_port
            ));
        }

        if self.db_host.is_empty() {
            errors.push("Database host cannot be empty".to_string());
        }
        if self.db_name.is_empty() {
            errors.push("Database name cannot be empty".to_string());
        }

        if let Some(ref path) = self.logfile {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(format!(
                        "Log file directory does not exist: {}",
                        parent.display()
                    ));
                }
            }
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hostname: {}", self.hostname)?;
        writeln!(f, "Login Port: {}", self.login_port)?;
        writeln!(f, "Character Port: {}", self.character_port)?;
        writeln!(f, "Database Host: {}", self.db_host)?;
        writeln!(f, "Database Port: {}", self.db_port)?;
        writeln!(f, "Database Name: {}", self.db_name)?;
        writeln!(f, "Database Username: {}", self.db_username)?;
        writeln!(
            f,
            "Database Password: {}",
            if self.db_password.is_empty() { "" } else { "********" }
        )?;
        writeln!(
            f,
            "Output Logged To: {}",
            self.logfile.as_deref().unwrap_or("Standard Out")
        )?;
        writeln!(f, "Logging Level: {}", u8::from(self.log_level))?;
        write!(f, "Debug Mode Enabled: {}", self.debug_mode)
    }
}

/// Ports as numbers or quoted numbers; an empty string reads as 0
mod port_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u16),
        Text(String),
    }

    pub fn serialize<S>(port: &u16, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        port.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u16, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawPort::deserialize(deserializer)? {
            RawPort::Number(port) => Ok(port),
            RawPort::Text(text) if text.trim().is_empty() => Ok(0),
            RawPort::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("Invalid port: {text}"))),
        }
    }
}
