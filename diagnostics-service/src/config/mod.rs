use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    pub common: core_config::Config,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Cap on the multipart request body. Attachments are only ever listed
    /// by name, but the body still has to be received in full.
    pub max_bytes: usize,
}

impl DiagnosticsConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix.
        let common = core_config::Config::load()?;

        let max_bytes = match env::var("UPLOAD_MAX_BYTES") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid UPLOAD_MAX_BYTES: {}", e))
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(DiagnosticsConfig {
            common,
            upload: UploadConfig { max_bytes },
        })
    }
}
