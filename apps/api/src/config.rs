use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which slot store backs the drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File { dir: PathBuf },
    Redis { url: String, key_prefix: String },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable the chosen backend needs is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    /// Largest serialized slot value accepted, in bytes. Unlimited if unset.
    pub slot_quota_bytes: Option<usize>,
    /// Also write the basic-info and experience slices to their step slots.
    pub mirror_legacy_slots: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let storage_backend = match var("STORAGE_BACKEND").as_deref().unwrap_or("memory") {
            "memory" => StorageBackend::Memory,
            "file" => StorageBackend::File {
                dir: PathBuf::from(require("STORAGE_DIR")?),
            },
            "redis" => StorageBackend::Redis {
                url: require("REDIS_URL")?,
                key_prefix: var("REDIS_KEY_PREFIX").unwrap_or_else(|| "portfolio:".to_string()),
            },
            other => bail!("STORAGE_BACKEND must be one of memory, file, redis (got '{other}')"),
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            storage_backend,
            slot_quota_bytes: var("SLOT_QUOTA_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("SLOT_QUOTA_BYTES must be a byte count")?,
            mirror_legacy_slots: var("MIRROR_LEGACY_SLOTS")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("MIRROR_LEGACY_SLOTS must be true or false")?
                .unwrap_or(false),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            storage_backend: StorageBackend::Memory,
            slot_quota_bytes: None,
            mirror_legacy_slots: false,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config_from(&[]).unwrap();
        assert_eq!(c.port, 8080);
        assert_eq!(c.rust_log, "info");
        assert_eq!(c.storage_backend, StorageBackend::Memory);
        assert_eq!(c.slot_quota_bytes, None);
        assert!(!c.mirror_legacy_slots);
    }

    #[test]
    fn test_file_backend_requires_dir() {
        assert!(config_from(&[("STORAGE_BACKEND", "file")]).is_err());
        let c = config_from(&[("STORAGE_BACKEND", "file"), ("STORAGE_DIR", "/tmp/slots")]).unwrap();
        assert_eq!(
            c.storage_backend,
            StorageBackend::File {
                dir: PathBuf::from("/tmp/slots")
            }
        );
    }

    #[test]
    fn test_redis_backend_prefix_default() {
        assert!(config_from(&[("STORAGE_BACKEND", "redis")]).is_err());
        let c = config_from(&[
            ("STORAGE_BACKEND", "redis"),
            ("REDIS_URL", "redis://127.0.0.1/"),
        ])
        .unwrap();
        assert_eq!(
            c.storage_backend,
            StorageBackend::Redis {
                url: "redis://127.0.0.1/".to_string(),
                key_prefix: "portfolio:".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(config_from(&[("STORAGE_BACKEND", "indexeddb")]).is_err());
    }

    #[test]
    fn test_quota_and_mirror_flags() {
        let c = config_from(&[
            ("SLOT_QUOTA_BYTES", "5242880"),
            ("MIRROR_LEGACY_SLOTS", "Yes"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(c.slot_quota_bytes, Some(5_242_880));
        assert!(c.mirror_legacy_slots);
        assert_eq!(c.port, 3000);

        assert!(config_from(&[("SLOT_QUOTA_BYTES", "lots")]).is_err());
        assert!(config_from(&[("MIRROR_LEGACY_SLOTS", "maybe")]).is_err());
        assert!(config_from(&[("PORT", "99999")]).is_err());
    }
}
