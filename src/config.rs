//! Application configuration for the intake layer.
//!
//! The renderer itself takes no configuration; the upload directory and
//! size ceiling only matter to the caller that stages files and enforces
//! the intake policy.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// Default per-file size ceiling: 16 MiB. Public-facing clients have
/// historically enforced a tighter 2.2 MiB limit on top of this.
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

/// Configuration for the handler layer around the renderer
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory uploads are staged in before rendering
    pub upload_dir: PathBuf,
    /// Per-file byte ceiling enforced by the intake policy
    pub max_content_length: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: env::temp_dir().join("uploads"),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl AppConfig {
    /// Build a configuration from the environment.
    ///
    /// `UPLOAD_FOLDER` overrides the staging directory and
    /// `MAX_CONTENT_LENGTH` the byte ceiling; anything unset keeps its
    /// default.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = env::var("UPLOAD_FOLDER") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = env::var("MAX_CONTENT_LENGTH") {
            config.max_content_length = raw.parse::<u64>().map_err(|_| {
                Error::ConfigError(format!("MAX_CONTENT_LENGTH is not a byte count: {raw}"))
            })?;
        }
        Ok(config)
    }

    /// Validate the configuration, creating the upload directory if needed
    /// and checking it is writable.
    pub fn validate(&self) -> Result<()> {
        if self.max_content_length == 0 {
            return Err(Error::ConfigError(
                "MAX_CONTENT_LENGTH must be greater than zero".to_string(),
            ));
        }
        std::fs::create_dir_all(&self.upload_dir).map_err(|e| {
            Error::ConfigError(format!(
                "Cannot create upload folder {}: {}",
                self.upload_dir.display(),
                e
            ))
        })?;

        // Probe writability; permission bits alone are unreliable across platforms
        let probe = self.upload_dir.join(format!(".probe_{}", uuid::Uuid::new_v4().simple()));
        std::fs::write(&probe, b"").map_err(|e| {
            Error::ConfigError(format!(
                "Upload folder {} is not writable: {}",
                self.upload_dir.display(),
                e
            ))
        })?;
        let _ = std::fs::remove_file(&probe);

        debug!("upload folder ready at {}", self.upload_dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Environment variables are process-global; tests that touch them take
    // this lock so parallel test threads cannot interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        f();
        for (key, _) in vars {
            env::remove_var(key);
        }
    }

    #[test]
    fn from_env_overrides_folder_and_ceiling() {
        with_env(
            &[
                ("UPLOAD_FOLDER", Some("/tmp/endcard-test-uploads")),
                ("MAX_CONTENT_LENGTH", Some("2306867")),
            ],
            || {
                let config = AppConfig::from_env().expect("from_env");
                assert_eq!(config.upload_dir, PathBuf::from("/tmp/endcard-test-uploads"));
                assert_eq!(config.max_content_length, 2306867);
            },
        );
    }

    #[test]
    fn from_env_keeps_defaults_when_unset() {
        with_env(
            &[("UPLOAD_FOLDER", None), ("MAX_CONTENT_LENGTH", None)],
            || {
                let config = AppConfig::from_env().expect("from_env");
                let defaults = AppConfig::default();
                assert_eq!(config.upload_dir, defaults.upload_dir);
                assert_eq!(config.max_content_length, defaults.max_content_length);
            },
        );
    }

    #[test]
    fn from_env_rejects_a_non_numeric_ceiling() {
        with_env(&[("MAX_CONTENT_LENGTH", Some("2.2MB"))], || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, Error::ConfigError(_)));
            assert!(err.to_string().contains("2.2MB"));
        });
    }

    #[test]
    fn default_config_has_a_sane_ceiling() {
        let config = AppConfig::default();
        assert_eq!(config.max_content_length, 16 * 1024 * 1024);
    }

    #[test]
    fn zero_ceiling_is_rejected() {
        let config = AppConfig {
            max_content_length: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn validate_creates_the_upload_dir() {
        let base = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            upload_dir: base.path().join("nested").join("uploads"),
            ..Default::default()
        };
        config.validate().expect("validate");
        assert!(config.upload_dir.is_dir());
    }
}
