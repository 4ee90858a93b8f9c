//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEE_API_*` environment variables and an
//! optional config file. Numeric fields carry OrthoConfig defaults so an
//! empty environment still loads; the text fields fall back in their
//! accessors.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8111;
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8112/api/v1/employee";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid upstream url {url:?}: {source}")]
    InvalidUpstreamUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("upstream url {url:?} must use http or https")]
    UnsupportedUpstreamScheme { url: String },
    #[error("upstream timeout must be at least one second")]
    ZeroUpstreamTimeout,
}

/// Settings for the HTTP listener and the upstream client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_API")]
pub struct EmployeeApiSettings {
    /// Interface to bind, e.g. `0.0.0.0` or `::1`.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Base URL of the upstream employee collection.
    pub upstream_url: Option<String>,
    /// Per-request timeout for upstream calls, in seconds.
    #[ortho_config(default = DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    pub upstream_timeout_secs: u64,
}

impl EmployeeApiSettings {
    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Upstream base URL.
    ///
    /// # Errors
    ///
    /// Fails when the value does not parse or is not http(s).
    pub fn upstream_url(&self) -> Result<Url, SettingsError> {
        let raw = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidUpstreamUrl {
            url: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UnsupportedUpstreamScheme {
                url: raw.to_owned(),
            }),
        }
    }

    /// Client timeout applied to each upstream request.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroUpstreamTimeout`] for a zero timeout.
    pub fn upstream_timeout(&self) -> Result<Duration, SettingsError> {
        match self.upstream_timeout_secs {
            0 => Err(SettingsError::ZeroUpstreamTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and validation.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EMPLOYEE_API_HOST",
        "EMPLOYEE_API_PORT",
        "EMPLOYEE_API_UPSTREAM_URL",
        "EMPLOYEE_API_UPSTREAM_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> EmployeeApiSettings {
        EmployeeApiSettings::load_from_iter([OsString::from("employee-api")])
            .expect("config should load")
    }

    fn settings(host: Option<&str>, url: Option<&str>, timeout: u64) -> EmployeeApiSettings {
        EmployeeApiSettings {
            host: host.map(str::to_owned),
            port: DEFAULT_PORT,
            upstream_url: url.map(str::to_owned),
            upstream_timeout_secs: timeout,
        }
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind addr"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        assert_eq!(
            settings.upstream_url().expect("default url").as_str(),
            DEFAULT_UPSTREAM_URL
        );
        assert_eq!(
            settings.upstream_timeout().expect("default timeout"),
            Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn a_single_override_keeps_the_other_defaults() {
        let _guard = lock_env([
            ("EMPLOYEE_API_HOST", Some("127.0.0.1".to_owned())),
            ("EMPLOYEE_API_PORT", None),
            ("EMPLOYEE_API_UPSTREAM_URL", None),
            ("EMPLOYEE_API_UPSTREAM_TIMEOUT_SECS", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind addr"),
            SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
        );
        assert_eq!(settings.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EMPLOYEE_API_HOST", Some("127.0.0.1".to_owned())),
            ("EMPLOYEE_API_PORT", Some("9000".to_owned())),
            (
                "EMPLOYEE_API_UPSTREAM_URL",
                Some("https://dummy.example/api/v1/employee".to_owned()),
            ),
            ("EMPLOYEE_API_UPSTREAM_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind addr"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(
            settings.upstream_url().expect("url").host_str(),
            Some("dummy.example")
        );
        assert_eq!(
            settings.upstream_timeout().expect("timeout"),
            Duration::from_secs(3)
        );
    }

    #[rstest]
    fn ipv6_hosts_are_accepted() {
        let addr = settings(Some("::1"), None, DEFAULT_UPSTREAM_TIMEOUT_SECS)
            .bind_addr()
            .expect("ipv6 host");
        assert!(addr.is_ipv6());
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let err = settings(Some("localhost"), None, DEFAULT_UPSTREAM_TIMEOUT_SECS)
            .bind_addr()
            .expect_err("not an IP address");
        assert!(matches!(err, SettingsError::InvalidHost { .. }));
    }

    #[rstest]
    #[case::unparseable("not a url")]
    #[case::wrong_scheme("ftp://upstream/employee")]
    fn bad_upstream_urls_are_rejected(#[case] url: &str) {
        assert!(settings(None, Some(url), DEFAULT_UPSTREAM_TIMEOUT_SECS).upstream_url().is_err());
    }

    #[rstest]
    fn zero_timeout_is_rejected() {
        let err = settings(None, None, 0)
            .upstream_timeout()
            .expect_err("zero timeout");
        assert!(matches!(err, SettingsError::ZeroUpstreamTimeout));
    }
}
