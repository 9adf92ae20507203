//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use qb_core::settings::SettingsConfig;
use qb_kg::{KgClient, KgConfig, DEFAULT_API_VERSION, DEFAULT_KG_URL};
use qb_web::{AppState, WebConfig, DEFAULT_API_ROOT};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "QB_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "QB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Path prefix of the JSON API
    #[arg(long, env = "QB_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Directory holding the built frontend
    #[arg(long, env = "QB_STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Knowledge graph core URL
    #[arg(long, env = "KG_CORE_URL", default_value = DEFAULT_KG_URL)]
    pub kg_url: String,

    /// Knowledge graph core API version
    #[arg(long, env = "KG_CORE_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub kg_api_version: String,

    /// Commit of the deployed build
    #[arg(long, env = "QB_COMMIT", default_value = "")]
    pub commit: String,

    /// Keycloak realm
    #[arg(long, env = "KEYCLOAK_REALM", default_value = "kg")]
    pub keycloak_realm: String,

    /// Keycloak client id of the frontend
    #[arg(long, env = "KEYCLOAK_CLIENT_ID", default_value = "kg")]
    pub keycloak_client_id: String,

    /// Sentry DSN reported to the frontend
    #[arg(long, env = "SENTRY_DSN_UI", default_value = "")]
    pub sentry_dsn_ui: String,

    /// Sentry environment
    #[arg(long, env = "SENTRY_ENVIRONMENT", default_value = "")]
    pub sentry_environment: String,

    /// Matomo URL
    #[arg(long, env = "MATOMO_URL", default_value = "")]
    pub matomo_url: String,

    /// Matomo site id
    #[arg(long, env = "MATOMO_SITE_ID", default_value = "")]
    pub matomo_site_id: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "qb-serve.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    fn settings(&self) -> SettingsConfig {
        SettingsConfig {
            commit: self.commit.clone(),
            keycloak_realm: self.keycloak_realm.clone(),
            keycloak_client_id: self.keycloak_client_id.clone(),
            sentry_dsn_ui: self.sentry_dsn_ui.clone(),
            sentry_environment: self.sentry_environment.clone(),
            matomo_url: self.matomo_url.clone(),
            matomo_site_id: self.matomo_site_id.clone(),
        }
    }

    fn kg_config(&self) -> KgConfig {
        KgConfig {
            base_url: self.kg_url.clone(),
            api_version: self.kg_api_version.clone(),
        }
    }

    fn web_config(&self) -> WebConfig {
        WebConfig::new(&self.api_root, &self.static_dir, self.settings())
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let kg = Arc::new(KgClient::new(&args.kg_config()));
    let config = args.web_config();

    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "No index.html found, the frontend will not be served"
        );
    }

    println!();
    println!("  {} {}", "Query Builder".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Frontend".green(), args.host, args.port);
    println!(
        "  {}       http://{}:{}{}",
        "API".green(),
        args.host,
        args.port,
        config.api_root
    );
    println!("  {}        {}", "KG".green(), args.kg_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let state = AppState::new(kg, config);
    qb_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn test_args_build_configs() {
        let cli = TestCli::parse_from([
            "qb",
            "--api-root",
            "service/api/",
            "--kg-url",
            "https://core.kg.example.org",
            "--commit",
            "a1b2c3",
            "--matomo-url",
            "https://stats.example.org",
        ]);

        let web = cli.serve.web_config();
        assert_eq!(web.api_root, "/service/api");
        assert_eq!(web.settings.commit, "a1b2c3");
        assert_eq!(web.settings.matomo_url, "https://stats.example.org");
        assert_eq!(web.settings.matomo_site_id, "");

        let kg = cli.serve.kg_config();
        assert_eq!(kg.base_url, "https://core.kg.example.org");
    }
}
