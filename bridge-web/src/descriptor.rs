//! # Connect App Descriptor
//!
//! Builds the JSON document Jira fetches to install the app. The key is
//! suffixed with the instance name so staging and production installs can
//! coexist on one Jira site; the display name is only suffixed outside
//! production.

use serde_json::{Value, json};

/// Render the Connect app descriptor for this deployment
pub fn connect_app_descriptor(instance_name: Option<&str>, base_url: &str) -> Value {
  let is_prod = instance_name == Some("production");
  let name_suffix = match instance_name {
    Some(instance) if !is_prod => format!(" ({instance})"),
    _ => String::new(),
  };
  let key_suffix = instance_name.map(|instance| format!(".{instance}")).unwrap_or_default();

  json!({
      // Stays false until the app is verified against the GDPR-compliant APIs
      "apiMigrations": {
          "gdpr": false
      },
      "name": format!("GitHub{name_suffix}"),
      "description": "Application for integrating with GitHub",
      "key": format!("com.github.integration{key_suffix}"),
      "baseUrl": base_url,
      "lifecycle": {
          "installed": "/jira/events/installed",
          "uninstalled": "/jira/events/uninstalled",
          "enabled": "/jira/events/enabled",
          "disabled": "/jira/events/disabled"
      },
      "vendor": {
          "name": "GitHub",
          "url": "http://github.com"
      },
      "authentication": {
          "type": "jwt"
      },
      "scopes": ["READ", "WRITE", "DELETE", "ADMIN"],
      "apiVersion": 1,
      "modules": {
          "jiraDevelopmentTool": {
              "application": {
                  "value": "GitHub"
              },
              "capabilities": ["branch", "commit", "pull_request"],
              "key": "github-development-tool",
              "logoUrl": "https://assets-cdn.github.com/images/modules/logos_page/GitHub-Mark.png",
              "name": {
                  "value": "GitHub"
              },
              "url": "https://github.com"
          },
          "postInstallPage": {
              "key": "github-post-install-page",
              "name": {
                  "value": "GitHub Configuration"
              },
              "url": "/jira/configuration",
              "conditions": [
                  {
                      "condition": "addon_property_exists",
                      "invert": true,
                      "params": {
                          "propertyKey": "configuration",
                          "objectKey": "has-repos"
                      }
                  },
                  {
                      "condition": "user_is_admin"
                  }
              ]
          }
      }
  })
}
