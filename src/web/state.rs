use crate::embed::EmbedBuilder;
use crate::tenor::TenorClient;
use crate::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tenor: TenorClient,
    pub embeds: EmbedBuilder,
}

impl AppState {
    /// Wires the Tenor client and embed builder onto one shared HTTP client.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let http = config.http_client()?;
        let tenor = TenorClient::from_config(&config, http.clone())?;
        let embeds = EmbedBuilder::from_config(&config, http, tenor.clone());
        Ok(Self {
            config,
            tenor,
            embeds,
        })
    }
}
