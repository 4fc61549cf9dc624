use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "NOTES_PORT";
    pub const HOST: &str = "NOTES_HOST";
    /// JSON file holding the whole note collection
    pub const DATA_FILE: &str = "NOTES_DATA_FILE";
    /// Directory served at `/` for the browser client
    pub const PUBLIC_DIR: &str = "NOTES_PUBLIC_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3001;
    pub const HOST: &str = "127.0.0.1";
    pub const DATA_FILE: &str = "data.json";
    pub const PUBLIC_DIR: &str = "public";
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub public_dir: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "[NOTES] Invalid {} value '{}', using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            host: lookup(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            data_file: lookup(env_vars::DATA_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::DATA_FILE)),
            public_dir: lookup(env_vars::PUBLIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::PUBLIC_DIR)),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
