//! Service configuration, read from flags or the environment.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime settings for the bridge service
#[derive(Debug, Clone, Parser)]
#[command(name = "bridge-web", about = "GitHub to Jira bridge service")]
pub struct Settings {
  /// Address the HTTP server binds to
  #[arg(long, env = "BRIDGE_BIND_ADDR", default_value = "127.0.0.1:8080")]
  pub bind_addr: SocketAddr,

  /// Deployment instance name; suffixes the Connect app key and, outside
  /// production, the app name
  #[arg(long, env = "INSTANCE_NAME")]
  pub instance_name: Option<String>,

  /// Externally reachable base URL advertised in the app descriptor
  #[arg(long, env = "APP_URL", default_value = "http://localhost:8080")]
  pub app_url: String,

  /// GitHub API host the management endpoints talk to
  #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
  pub github_api_url: String,
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;

  #[test]
  fn test_defaults() {
    let settings = Settings::parse_from(["bridge-web"]);

    assert_eq!(settings.bind_addr.port(), 8080);
    assert!(settings.instance_name.is_none());
    assert_eq!(settings.github_api_url, "https://api.github.com");
  }

  #[test]
  fn test_flags_override_defaults() {
    let settings = Settings::parse_from(["bridge-web", "--instance-name", "staging", "--app-url", "https://bridge.example.com"]);

    assert_eq!(settings.instance_name.as_deref(), Some("staging"));
    assert_eq!(settings.app_url, "https://bridge.example.com");
  }
}
