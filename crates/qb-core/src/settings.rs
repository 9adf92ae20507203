//! Frontend settings assembled from deployment configuration.

use serde::{Deserialize, Serialize};

/// Deployment values exposed to the frontend.
///
/// Empty strings mean "not configured".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    pub commit: String,
    pub keycloak_realm: String,
    pub keycloak_client_id: String,
    pub sentry_dsn_ui: String,
    pub sentry_environment: String,
    pub matomo_url: String,
    pub matomo_site_id: String,
}

/// Settings payload consumed by the single-page application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub keycloak: KeycloakSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentry: Option<SentrySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matomo: Option<MatomoSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakSettings {
    pub realm: String,
    pub url: String,
    pub client_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentrySettings {
    pub dsn: String,
    pub release: String,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatomoSettings {
    pub url: String,
    pub site_id: String,
}

impl Settings {
    /// Assemble the settings, or `None` when no auth endpoint is known.
    ///
    /// Sentry is only reported together with a commit, which is only set
    /// on deployed environments.
    pub fn assemble(config: &SettingsConfig, auth_endpoint: Option<&str>) -> Option<Self> {
        let endpoint = auth_endpoint.filter(|e| !is_blank(e))?;

        let commit = Some(config.commit.as_str())
            .filter(|c| !is_blank(c) && *c != "\"\"")
            .map(str::to_string);

        let sentry = commit
            .as_ref()
            .filter(|_| !is_blank(&config.sentry_dsn_ui))
            .map(|release| SentrySettings {
                dsn: config.sentry_dsn_ui.clone(),
                release: release.clone(),
                environment: config.sentry_environment.clone(),
            });

        let matomo = (!is_blank(&config.matomo_url) && !is_blank(&config.matomo_site_id)).then(|| {
            MatomoSettings {
                url: config.matomo_url.clone(),
                site_id: config.matomo_site_id.clone(),
            }
        });

        Some(Self {
            keycloak: KeycloakSettings {
                realm: config.keycloak_realm.clone(),
                url: endpoint.to_string(),
                client_id: config.keycloak_client_id.clone(),
            },
            commit,
            sentry,
            matomo,
        })
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
