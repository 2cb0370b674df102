use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::ScrapeError;
use crate::leetcode::Difficulty;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const QUESTION_QUERY: &str = r#"
query questionContent($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
    content
    difficulty
  }
}
"#;

/// Where problems come from. The scraper only ever has one call in flight.
#[allow(async_fn_in_trait)]
pub trait ProblemSource {
    async fn fetch_catalog(&self) -> Result<Catalog, ScrapeError>;

    async fn fetch_question(&self, title_slug: &str) -> Result<QuestionDetail, ScrapeError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub question_id: String,
    pub question_frontend_id: String,
    pub title: String,
    pub title_slug: String,
    /// Null for paid-only questions.
    #[serde(default)]
    pub content: Option<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: QuestionVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionVariables<'a> {
    title_slug: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<QuestionData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<QuestionDetail>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: Client,
    host: String,
}

impl LeetCodeClient {
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self, ScrapeError> {
        let host = host.into();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| ScrapeError::Transport {
                url: host.clone(),
                source,
            })?;

        Ok(Self { client, host })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn catalog_url(&self) -> String {
        format!("https://{}/api/problems/all/", self.host)
    }

    fn graphql_url(&self) -> String {
        format!("https://{}/graphql", self.host)
    }

    fn referer(&self) -> String {
        format!("https://{}/problems/", self.host)
    }

    fn question_request(&self, title_slug: &str) -> RequestBuilder {
        let request = GraphqlRequest {
            query: QUESTION_QUERY,
            variables: QuestionVariables { title_slug },
        };
        self.client
            .post(self.graphql_url())
            .header(header::REFERER, self.referer())
            .header(header::USER_AGENT, USER_AGENT)
            .json(&request)
    }
}

impl ProblemSource for LeetCodeClient {
    async fn fetch_catalog(&self) -> Result<Catalog, ScrapeError> {
        let url = self.catalog_url();
        let body = send(self.client.get(&url), &url).await?;
        parse_catalog(&url, &body)
    }

    async fn fetch_question(&self, title_slug: &str) -> Result<QuestionDetail, ScrapeError> {
        let url = self.graphql_url();
        let body = send(self.question_request(title_slug), &url).await?;
        parse_question(&url, &body)
    }
}

async fn send(builder: RequestBuilder, url: &str) -> Result<String, ScrapeError> {
    let transport = |source: reqwest::Error| ScrapeError::Transport {
        url: url.to_string(),
        source,
    };

    let resp = builder.send().await.map_err(transport)?;
    check_status(url, resp.status())?;

    let body = resp.text().await.map_err(transport)?;
    debug!(url, bytes = body.len(), "received response");
    Ok(body)
}

fn check_status(url: &str, status: StatusCode) -> Result<(), ScrapeError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Bodies that are not JSON are kept as a raw string value, so they fail
/// later as a shape mismatch instead of at decode time.
pub fn decode_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

pub fn parse_catalog(url: &str, body: &str) -> Result<Catalog, ScrapeError> {
    serde_json::from_value(decode_body(body)).map_err(|e| ScrapeError::parse(url, e))
}

pub fn parse_question(url: &str, body: &str) -> Result<QuestionDetail, ScrapeError> {
    let resp: GraphqlResponse =
        serde_json::from_value(decode_body(body)).map_err(|e| ScrapeError::parse(url, e))?;

    match resp.data.and_then(|data| data.question) {
        Some(question) => Ok(question),
        None if resp.errors.is_empty() => Err(ScrapeError::parse(url, "missing data.question")),
        None => {
            let messages = resp
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(ScrapeError::parse(
                url,
                format!("missing data.question: {}", messages),
            ))
        }
    }
}
