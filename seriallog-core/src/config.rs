use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::severity::Severity;

#[derive(FromEnv)]
#[from_env(prefix = "SERIALLOG")]
#[allow(non_snake_case)]
pub struct SeriallogConfig {
    #[from_env(default = "INFO")]
    pub DEFAULT_LEVEL: String,
}

impl SeriallogConfig {
    /// Threshold used by loggers built without an explicit severity.
    /// Unparseable values fall back to `Info`.
    pub fn default_level(&self) -> Severity {
        self.DEFAULT_LEVEL.parse().unwrap_or(Severity::Info)
    }
}

pub static SERIALLOG_CONFIG: LazyLock<SeriallogConfig> = LazyLock::new(|| {
    SeriallogConfig::from_env().unwrap_or_else(|_| SeriallogConfig {
        DEFAULT_LEVEL: Severity::Info.as_str().into(),
    })
});
