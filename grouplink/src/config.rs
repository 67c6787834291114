use once_cell::sync::Lazy;

pub const DEFAULT_HOST: &str = "signal.group";
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_APP_SCHEME: &str = "sgnl";

static DEFAULT_CONFIG: Lazy<LinkConfig> = Lazy::new(LinkConfig::default);

/// Where group invite links live.
///
/// Links are always generated with `scheme`. On decode, `app_scheme` is
/// accepted as an alias so that links handed over by other apps on the
/// device are recognised too. All comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    pub host: String,
    pub scheme: String,
    pub app_scheme: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            app_scheme: DEFAULT_APP_SCHEME.to_string(),
        }
    }
}

impl LinkConfig {
    /// The configuration used by [`crate::encode`] and [`crate::decode`].
    pub fn global() -> &'static LinkConfig {
        &DEFAULT_CONFIG
    }

    /// `<scheme>://<host>/#`, the part of every generated link before the payload.
    pub fn url_prefix(&self) -> String {
        format!("{}://{}/#", self.scheme, self.host)
    }

    pub fn matches_scheme(&self, scheme: &str) -> bool {
        self.scheme.eq_ignore_ascii_case(scheme) || self.app_scheme.eq_ignore_ascii_case(scheme)
    }

    pub fn matches_host(&self, host: &str) -> bool {
        self.host.eq_ignore_ascii_case(host)
    }
}
