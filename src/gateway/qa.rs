use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{ApiKey, GatewayError, QaGateway, snippet};

const API_VERSION: &str = "2021-10-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// A single candidate answer, ranked by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    /// The answer text.
    pub answer: String,
    /// Confidence assigned by the service. Kept for callers; not displayed.
    #[serde(rename = "confidenceScore", default)]
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    answers: Vec<Answer>,
}

/// Client for the hosted question-answering service.
pub struct QaClient {
    client: Client,
    endpoint: String,
    project: String,
    deployment: String,
    api_key: Option<ApiKey>,
}

impl QaClient {
    pub fn new(
        endpoint: String,
        project: String,
        deployment: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            project,
            deployment,
            api_key: api_key.map(ApiKey::new),
        }
    }
}

impl QaGateway for QaClient {
    async fn answers(&self, question: &str) -> Result<Vec<Answer>, GatewayError> {
        let url = format!(
            "{}/language/:query-knowledgebases",
            self.endpoint.trim_end_matches('/')
        );

        let mut http_request = self
            .client
            .post(&url)
            .query(&[
                ("projectName", self.project.as_str()),
                ("deploymentName", self.deployment.as_str()),
                ("api-version", API_VERSION),
            ])
            .json(&QueryRequest { question })
            .timeout(REQUEST_TIMEOUT);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Ocp-Apim-Subscription-Key", api_key.expose());
        }

        let response = http_request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "answer lookup failed");
            return Err(GatewayError::ServiceUnavailable {
                code: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body: QueryResponse = response.json().await?;
        debug!(answers = body.answers.len(), "answer lookup complete");
        Ok(body.answers)
    }
}
