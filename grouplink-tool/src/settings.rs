use grouplink::LinkConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Couldn't read the settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Couldn't parse the settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid settings: {0} must not be empty")]
    EmptyField(&'static str),
}

/// Tool settings, read from a TOML file.
///
/// ```toml
/// [link]
/// host = "signal.group"
/// scheme = "https"
/// app_scheme = "sgnl"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub link: LinkConfig,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(&std::fs::read_to_string(path)?)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("link.host", &self.link.host),
            ("link.scheme", &self.link.scheme),
            ("link.app_scheme", &self.link.app_scheme),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(SettingsError::EmptyField(name));
            }
        }
        Ok(())
    }
}
