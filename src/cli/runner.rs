//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::engine::{SyncEngine, HEADER_KEY_ID, HEADER_KEY_SECRET};
use crate::error::Result;
use crate::http::{ApiClient, ApiClientConfig};
use crate::pagination::now_ms;
use crate::types::SpaceListPage;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;

        match &self.cli.command {
            Commands::Run { .. } => {
                let mut engine = SyncEngine::new(config);
                let stats = engine.run().await?;
                println!("Export complete: {stats}");
                Ok(())
            }
            Commands::Check => self.check(&config).await,
        }
    }

    /// Environment config with CLI flags layered on top
    fn build_config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;

        if let Some(domain) = &self.cli.domain {
            config.api_base = if domain.starts_with("http://") || domain.starts_with("https://") {
                domain.clone()
            } else {
                format!("https://{domain}")
            };
        }
        if let Some(path) = &self.cli.state_file {
            config.state_path = path.clone();
        }
        if let Some(path) = &self.cli.json_dir {
            config.json_dir = path.clone();
        }
        if let Some(path) = &self.cli.markdown_dir {
            config.markdown_dir = path.clone();
        }
        if self.cli.no_cache {
            config.cache_dir = None;
        } else if let Some(path) = &self.cli.cache_dir {
            config.cache_dir = Some(path.clone());
        }
        if let Commands::Run {
            start_timestamp: Some(ts),
        } = &self.cli.command
        {
            config.start_cursor = Some(*ts);
        }

        Ok(config)
    }

    /// Fetch a single space page to prove the credentials work
    async fn check(&self, config: &Config) -> Result<()> {
        let client_config = ApiClientConfig::new(&config.api_base)
            .timeout(config.timeout)
            .header(HEADER_KEY_ID, &config.key_id)
            .header(HEADER_KEY_SECRET, &config.key_secret);
        let client = ApiClient::new(client_config);

        let page: SpaceListPage = client
            .get_json(&format!(
                "/api/personal/space/list?spacesToWhen={}&maxSpaceCount=1",
                now_ms()
            ))
            .await?;

        println!(
            "Connection OK: credentials accepted by {} ({} space{} on the first page)",
            config.api_base,
            page.personal_spaces.len(),
            if page.personal_spaces.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }
}
