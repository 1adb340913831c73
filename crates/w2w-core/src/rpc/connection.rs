use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::CoreError;

/// Timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Path of the JSON-RPC endpoint on both services.
pub const JSON_RPC_PATH: &str = "/json_rpc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
        }
    }
}

/// Backend a request is addressed to. Both live on the same host and differ
/// only by port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Wallet,
    Daemon,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wallet => write!(f, "wallet"),
            Self::Daemon => write!(f, "daemon"),
        }
    }
}

/// Where and how to reach the two services. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    scheme: Scheme,
    host: String,
    wallet_port: u16,
    daemon_port: u16,
    timeout: Duration,
}

impl ConnectionConfig {
    /// Build a config from a `http://host` or `https://host` URI.
    ///
    /// A `timeout_ms` of `None` or `0` selects [`DEFAULT_TIMEOUT_MS`].
    pub fn new(
        uri: &str,
        wallet_port: u16,
        daemon_port: u16,
        timeout_ms: Option<u64>,
    ) -> Result<Self, CoreError> {
        let (scheme, host) = parse_connection(uri)?;
        let timeout_ms = timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let config = Self {
            scheme,
            host,
            wallet_port,
            daemon_port,
            timeout: Duration::from_millis(timeout_ms),
        };
        // Surface malformed hosts now rather than on the first call.
        config.endpoint(Service::Wallet, JSON_RPC_PATH)?;
        Ok(config)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn port(&self, service: Service) -> u16 {
        match service {
            Service::Wallet => self.wallet_port,
            Service::Daemon => self.daemon_port,
        }
    }

    /// Full URL of `path` on `service`.
    pub fn endpoint(&self, service: Service, path: &str) -> Result<Url, CoreError> {
        let raw = format!(
            "{}://{}:{}{path}",
            self.scheme,
            self.host,
            self.port(service)
        );
        let url = Url::parse(&raw)
            .map_err(|e| CoreError::Config(format!("invalid host `{}`: {e}", self.host)))?;
        if url.port_or_known_default() != Some(self.port(service)) || url.path() != path {
            return Err(CoreError::Config(format!(
                "host `{}` must not include a port or path",
                self.host
            )));
        }
        Ok(url)
    }
}

fn parse_connection(uri: &str) -> Result<(Scheme, String), CoreError> {
    if uri.is_empty() {
        return Err(CoreError::Config("host required".to_owned()));
    }
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| CoreError::Config("host must begin with http(s)://".to_owned()))?;
    let scheme = match scheme {
        "http" => Scheme::Http,
        "https" => Scheme::Https,
        _ => return Err(CoreError::Config("host must begin with http(s)://".to_owned())),
    };

    let host = rest.trim_end_matches('/');
    if host.is_empty() {
        return Err(CoreError::Config("host required".to_owned()));
    }
    let parsed = Url::parse(uri)
        .map_err(|e| CoreError::Config(format!("invalid host `{host}`: {e}")))?;
    let Some(host_str) = parsed.host_str() else {
        return Err(CoreError::Config("host required".to_owned()));
    };

    // Ports come from the service settings, so the URI carries nothing past
    // the host. `Url` hides a default port, hence the raw `:` check; a
    // bracketed IPv6 literal is the only host form allowed to contain `:`.
    let has_port = parsed.port().is_some() || (!host.starts_with('[') && host.contains(':'));
    let has_extra = parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || !parsed.username().is_empty()
        || parsed.password().is_some()
        || host.contains(['/', '?', '#', '@']);
    if has_port || has_extra {
        return Err(CoreError::Config(format!(
            "host `{host}` must not include a port or path"
        )));
    }
    Ok((scheme, host_str.to_owned()))
}
