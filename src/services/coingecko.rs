use async_trait::async_trait;
use reqwest::Client;

use crate::error::LookupError;
use crate::services::price_lookup::PriceLookup;

#[derive(Clone)]
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PriceLookup for CoinGeckoClient {
    /// GET /simple/price?ids=<asset>&vs_currencies=<vs>
    ///
    /// Response shape: `{"bitcoin": {"usd": 51000.0}}`.
    async fn spot(&self, asset_id: &str, vs_currency: &str) -> Result<f64, LookupError> {
        let url = format!("{}/simple/price", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[("ids", asset_id), ("vs_currencies", vs_currency)])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(LookupError::Status(res.status()));
        }

        let body: serde_json::Value = res.json().await?;

        body.get(asset_id)
            .and_then(|entry| entry.get(vs_currency))
            .and_then(|price| price.as_f64())
            .ok_or_else(|| LookupError::MissingPrice {
                asset_id: asset_id.to_string(),
                currency: vs_currency.to_string(),
            })
    }
}
