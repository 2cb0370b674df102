use std::fs;
use std::time::Duration;

use leetcode_concat::catalog::{Catalog, CatalogEntry};
use leetcode_concat::client::{parse_catalog, parse_question, QuestionDetail};
use leetcode_concat::render::{write_output, DEFAULT_HOST};
use leetcode_concat::{LeetcodeScraperBuilder, ProblemSource, ScrapeError};

const CATALOG: &str = r#"{
    "stat_status_pairs": [
        { "stat": { "question__title_slug": "two-sum", "frontend_question_id": 1 } },
        { "stat": { "question__title_slug": "add-two-numbers", "frontend_question_id": 2 } }
    ]
}"#;

const TWO_SUM: &str = r#"{
    "data": {
        "question": {
            "questionId": "1",
            "questionFrontendId": "1",
            "title": "Two Sum",
            "titleSlug": "two-sum",
            "content": "<p>Given <b>nums</b>.</p>",
            "difficulty": "Easy"
        }
    }
}"#;

/// Serves canned response bodies through the same parsers the HTTP client uses.
struct CannedSource;

impl ProblemSource for CannedSource {
    async fn fetch_catalog(&self) -> Result<Catalog, ScrapeError> {
        parse_catalog("catalog", CATALOG)
    }

    async fn fetch_question(&self, title_slug: &str) -> Result<QuestionDetail, ScrapeError> {
        match title_slug {
            "two-sum" => parse_question("graphql", TWO_SUM),
            _ => parse_question("graphql", "<html>rate limited</html>"),
        }
    }
}

async fn run(start: u32, end: u32) -> String {
    let scraper = LeetcodeScraperBuilder::default()
        .ids(start..=end)
        .delay(Duration::ZERO)
        .build()
        .unwrap();
    let report = scraper.scrape(&CannedSource).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leetcode-questions.txt");
    fs::write(&path, "stale content from a previous run").unwrap();
    write_output(&path, &report.render(DEFAULT_HOST).unwrap()).unwrap();
    fs::read_to_string(&path).unwrap()
}

#[tokio::test]
async fn single_question_should_produce_one_block() {
    let text = run(1, 1).await;
    assert_eq!(
        text,
        "QUESTION 1: Two Sum\n\
         DIFFICULTY: Easy\n\
         URL: https://leetcode.com/problems/two-sum/\n\
         \n\
         Given nums.\n\
         \n\
         ----------------------------------------\n"
    );
}

#[tokio::test]
async fn reversed_range_should_write_empty_file() {
    assert_eq!(run(10, 1).await, "");
}

#[tokio::test]
async fn failed_and_missing_ids_should_be_left_out() {
    // 2 resolves but its detail body is not JSON, 3..=4 are not in the catalog
    let text = run(1, 4).await;
    assert_eq!(text.matches("QUESTION ").count(), 1);
    assert!(text.starts_with("QUESTION 1: Two Sum\n"));
}

#[tokio::test]
async fn report_counts_should_add_up() {
    let scraper = LeetcodeScraperBuilder::default()
        .ids(vec![4, 2, 1, 3])
        .delay(Duration::ZERO)
        .build()
        .unwrap();
    let report = scraper.scrape(&CannedSource).await;

    assert_eq!(report.attempted(), 4);
    assert_eq!(report.skipped, vec![4, 3]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, 2);
    assert_eq!(report.records.len(), 1);
}

#[test]
fn catalog_entries_can_be_built_directly() {
    let catalog: Catalog = vec![CatalogEntry::new(5, "longest-palindromic-substring")]
        .into_iter()
        .collect();
    assert_eq!(catalog.resolve(5), Some("longest-palindromic-substring"));
}
