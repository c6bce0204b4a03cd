use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ApiKey, GatewayError, TranslationGateway, snippet};

const API_VERSION: &str = "3.0";
const CATALOG_SCOPE: &str = "translation";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// An entry of the remote language catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    /// Display name in English.
    pub name: String,
    /// Display name in the language itself.
    #[serde(rename = "nativeName")]
    pub native_name: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    translation: BTreeMap<String, Language>,
}

#[derive(Debug, Serialize)]
struct TranslateItem<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslatedItem {
    translations: Vec<TranslationAlternative>,
}

#[derive(Debug, Deserialize)]
struct TranslationAlternative {
    text: String,
}

/// Client for the hosted translation service.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    region: Option<String>,
    api_key: Option<ApiKey>,
}

impl TranslationClient {
    pub fn new(endpoint: String, region: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            region,
            api_key: api_key.map(ApiKey::new),
        }
    }

    fn authorize(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(api_key) = &self.api_key {
            request = request.header("Ocp-Apim-Subscription-Key", api_key.expose());
        }
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }
        request
    }
}

impl TranslationGateway for TranslationClient {
    async fn languages(&self) -> Result<BTreeMap<String, Language>, GatewayError> {
        let url = format!("{}/languages", self.endpoint.trim_end_matches('/'));

        let request = self
            .client
            .get(&url)
            .query(&[("api-version", API_VERSION), ("scope", CATALOG_SCOPE)])
            .timeout(REQUEST_TIMEOUT);

        let response = self.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "language catalog fetch failed");
            return Err(GatewayError::ServiceUnavailable {
                code: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body: LanguagesResponse = response.json().await?;
        debug!(languages = body.translation.len(), "language catalog fetched");
        Ok(body.translation)
    }

    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<String>, GatewayError> {
        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));

        let request = self
            .client
            .post(&url)
            .query(&[("api-version", API_VERSION), ("from", from), ("to", to)])
            .json(&[TranslateItem { text }])
            .timeout(REQUEST_TIMEOUT);

        let response = self.authorize(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "translation failed");
            return Err(GatewayError::ServiceUnavailable {
                code: status.as_u16(),
                message: snippet(&body),
            });
        }

        let items: Vec<TranslatedItem> = response.json().await?;
        let first = items
            .into_iter()
            .next()
            .and_then(|item| item.translations.into_iter().next())
            .map(|alternative| alternative.text);

        if first.is_none() {
            warn!(from, to, "translation returned no alternatives");
        }

        Ok(first)
    }
}
