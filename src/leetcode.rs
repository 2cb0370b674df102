use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;
use strum::{Display, EnumString};
use tracing::{error, info, warn};

use crate::catalog::SlugIndex;
use crate::client::{ProblemSource, QuestionDetail};
use crate::error::ScrapeError;
use crate::normalize::normalize_content;

#[derive(Debug, Builder)]
pub struct LeetcodeScraper {
    #[builder(setter(into))]
    ids: Ids,
    #[builder(default = "Duration::from_millis(1000)")]
    delay: Duration,
}

/// Frontend IDs, attempted in iteration order. Ranges are walked lazily.
#[derive(Debug, Clone)]
pub enum Ids {
    Range(RangeInclusive<u32>),
    List(Vec<u32>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    pub id: u32,
    pub title: String,
    /// Plain text, already normalized.
    pub content: String,
    pub difficulty: Difficulty,
    pub title_slug: String,
}

/// Terminal state of a single ID.
#[derive(Debug)]
pub enum Outcome {
    Collected(ProblemRecord),
    Skipped,
    Failed(ScrapeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub id: u32,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub records: Vec<ProblemRecord>,
    pub skipped: Vec<u32>,
    pub failed: Vec<Failure>,
    /// Set when the catalog could not be fetched; every ID then counts as
    /// failed without being listed in `failed`.
    pub catalog_error: Option<String>,
    pub unresolved: usize,
}

impl LeetcodeScraper {
    pub async fn scrape<S: ProblemSource>(&self, source: &S) -> ScrapeReport {
        let mut report = ScrapeReport::default();
        if self.ids.is_empty() {
            return report;
        }

        let index = match source.fetch_catalog().await {
            Ok(catalog) => catalog.index(),
            Err(e) => {
                error!("Error fetching problem catalog: {}", e);
                report.catalog_error = Some(e.to_string());
                report.unresolved = self.ids.len();
                return report;
            }
        };
        info!(questions = index.len(), "loaded problem catalog");

        let mut ids = self.ids.iter().peekable();
        while let Some(id) = ids.next() {
            info!("Fetching question {}...", id);
            let outcome = Outcome::from(scrape_one(source, &index, id).await);
            let requested = !matches!(outcome, Outcome::Skipped);
            report.push(id, outcome);

            if requested && ids.peek().is_some() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!("Fetched {} questions successfully.", report.records.len());
        report
    }
}

impl Ids {
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Ids::Range(range) => Box::new(range.clone()),
            Ids::List(ids) => Box::new(ids.iter().copied()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Ids::Range(range) if range.is_empty() => 0,
            Ids::Range(range) => (*range.end() - *range.start()) as usize + 1,
            Ids::List(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Ids::Range(range) => range.is_empty(),
            Ids::List(ids) => ids.is_empty(),
        }
    }
}

impl From<RangeInclusive<u32>> for Ids {
    fn from(range: RangeInclusive<u32>) -> Self {
        Ids::Range(range)
    }
}

impl From<Vec<u32>> for Ids {
    fn from(ids: Vec<u32>) -> Self {
        Ids::List(ids)
    }
}

async fn scrape_one<S: ProblemSource>(
    source: &S,
    index: &SlugIndex,
    id: u32,
) -> Result<ProblemRecord, ScrapeError> {
    let slug = index.get(id).ok_or(ScrapeError::NotFound { id })?;
    let detail = source.fetch_question(slug).await?;
    Ok(ProblemRecord::new(id, detail))
}

impl ProblemRecord {
    pub fn new(requested_id: u32, detail: QuestionDetail) -> Self {
        let id = match detail.question_frontend_id.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                warn!(
                    "question {} has frontend id {:?}, keeping requested id",
                    requested_id, detail.question_frontend_id
                );
                requested_id
            }
        };
        let content = match detail.content {
            Some(html) => normalize_content(&html),
            None => {
                warn!("question {} has no content", id);
                String::new()
            }
        };

        Self {
            id,
            title: detail.title,
            content,
            difficulty: detail.difficulty,
            title_slug: detail.title_slug,
        }
    }
}

impl From<Result<ProblemRecord, ScrapeError>> for Outcome {
    fn from(ret: Result<ProblemRecord, ScrapeError>) -> Self {
        match ret {
            Ok(record) => Outcome::Collected(record),
            Err(ScrapeError::NotFound { .. }) => Outcome::Skipped,
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl ScrapeReport {
    pub fn push(&mut self, id: u32, outcome: Outcome) {
        match outcome {
            Outcome::Collected(record) => {
                info!("Successfully fetched question {}: {}", id, record.title);
                self.records.push(record);
            }
            Outcome::Skipped => {
                info!("Question with ID {} not found, skipping...", id);
                self.skipped.push(id);
            }
            Outcome::Failed(e) => {
                error!("Error fetching question {}: {}", id, e);
                self.failed.push(Failure {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    pub fn attempted(&self) -> usize {
        self.records.len() + self.skipped.len() + self.failed_count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len() + self.unresolved
    }
}

/// Lenient ID argument parsing: leading decimal digits are used, anything
/// else (or zero) falls back to `default`. Values past `u32::MAX` clamp.
pub fn parse_id_arg(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return default;
    }

    match digits.parse::<u32>() {
        Ok(0) => default,
        Ok(id) => id,
        Err(_) => {
            warn!("ID {} is out of range, using {}", digits, u32::MAX);
            u32::MAX
        }
    }
}
