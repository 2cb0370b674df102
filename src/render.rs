use askama::Template;
use std::fs;
use std::path::Path;

use crate::error::ScrapeError;
use crate::leetcode::{ProblemRecord, ScrapeReport};

pub const DEFAULT_HOST: &str = "leetcode.com";
pub const DEFAULT_OUTPUT: &str = "leetcode-questions.txt";

#[derive(Debug, Template)]
#[template(path = "question.txt.j2", escape = "none")]
struct QuestionBlock<'a> {
    host: &'a str,
    record: &'a ProblemRecord,
}

/// One block, ending with the separator line (no trailing newline).
pub fn render_block(host: &str, record: &ProblemRecord) -> Result<String, ScrapeError> {
    Ok(QuestionBlock { host, record }.render()?)
}

/// Every block is newline-terminated and blocks are separated by a blank line.
pub fn render_document(host: &str, records: &[ProblemRecord]) -> Result<String, ScrapeError> {
    let blocks = records
        .iter()
        .map(|record| render_block(host, record).map(|block| block + "\n"))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blocks.join("\n"))
}

impl ScrapeReport {
    pub fn render(&self, host: &str) -> Result<String, ScrapeError> {
        render_document(host, &self.records)
    }
}

/// Overwrites `path` in one go.
pub fn write_output(path: impl AsRef<Path>, text: &str) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leetcode::Difficulty;

    fn record(id: u32, title: &str, slug: &str, content: &str) -> ProblemRecord {
        ProblemRecord {
            id,
            title: title.into(),
            content: content.into(),
            difficulty: Difficulty::Easy,
            title_slug: slug.into(),
        }
    }

    #[test]
    fn render_block_should_work() {
        let two_sum = record(1, "Two Sum", "two-sum", "Given nums.");
        let block = render_block(DEFAULT_HOST, &two_sum).unwrap();

        insta::assert_snapshot!("two_sum_block", block);
    }

    #[test]
    fn content_should_not_be_escaped() {
        let r = record(2, "A & B", "a-and-b", "x < y && y > z");
        let block = render_block(DEFAULT_HOST, &r).unwrap();
        assert!(block.starts_with("QUESTION 2: A & B\n"));
        assert!(block.contains("\n\nx < y && y > z\n\n"));
    }

    #[test]
    fn render_document_should_join_blocks() {
        let records = vec![
            record(3, "Three", "three", "c"),
            record(1, "One", "one", "a"),
        ];
        let text = render_document("example.com", &records).unwrap();
        let sep = "-".repeat(40);
        let expected = format!(
            "QUESTION 3: Three\nDIFFICULTY: Easy\nURL: https://example.com/problems/three/\n\nc\n\n{sep}\n\n\
             QUESTION 1: One\nDIFFICULTY: Easy\nURL: https://example.com/problems/one/\n\na\n\n{sep}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_document_should_be_empty() {
        assert_eq!(render_document(DEFAULT_HOST, &[]).unwrap(), "");
    }

    #[test]
    fn write_output_should_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        write_output(&path, "first run, longer content").unwrap();
        write_output(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
