use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `PORT` and `BIND_ADDR`. Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("BIND_ADDR").ok())
    }

    fn from_vars(port: Option<String>, bind_addr: Option<String>) -> Self {
        let defaults = Self::default();

        let port = match port {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|err| {
                warn!("ignoring PORT={value:?}: {err}");
                defaults.port
            }),
            None => defaults.port,
        };

        let bind_addr = match bind_addr {
            Some(value) => value.trim().parse::<IpAddr>().unwrap_or_else(|err| {
                warn!("ignoring BIND_ADDR={value:?}: {err}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self { bind_addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_everywhere_on_8080() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_port_and_address() {
        let config = Config::from_vars(Some("3000".into()), Some("127.0.0.1".into()));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_vars(Some("eighty".into()), Some("localhost".into()));
        assert_eq!(config, Config::default());
    }
}
