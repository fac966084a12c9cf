//! CSV question source loader.
//!
//! Sources are CSV files with a header row followed by `question,answer`
//! rows. Fields are taken verbatim; no trimming is applied because answers
//! are matched exactly.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::QuestionSet;

/// Parse CSV text into `(prompt, expected_answer)` pairs, skipping the header.
pub fn parse_question_source<R: Read>(input: R) -> Result<Vec<(String, String)>, QuizError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            QuizError::malformed(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != 2 {
            return Err(QuizError::malformed(
                line,
                format!("expected 2 columns, found {}", record.len()),
            ));
        }
        pairs.push((record[0].to_string(), record[1].to_string()));
    }

    if pairs.is_empty() {
        return Err(QuizError::malformed(2, "no question rows after the header"));
    }
    Ok(pairs)
}

/// Open, parse, and build a question set from a CSV file.
pub fn load_question_set(path: &Path) -> Result<QuestionSet, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse_question_source(file)?;
    tracing::debug!(path = %path.display(), questions = pairs.len(), "loaded question source");
    QuestionSet::from_pairs(pairs)
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID.
    pub question_id: u32,
    /// Warning message.
    pub message: String,
}

/// Check a question set for entries that load fine but are likely mistakes.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_prompts = HashSet::new();

    for q in set {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question_id: q.id(),
                message,
            });
        };

        if q.prompt().trim().is_empty() {
            warn("prompt is empty".into());
        } else if !seen_prompts.insert(q.prompt()) {
            warn(format!("duplicate prompt: {}", q.prompt()));
        }

        if q.expected_answer().is_empty() {
            warn("expected answer is empty".into());
        } else if q.expected_answer().trim() != q.expected_answer() {
            warn("expected answer has leading or trailing whitespace".into());
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBLEMS: &str = "question,answer\n5+5,10\n1+1,2\n\"what is 3,4 joined\",\"3,4\"\n";

    #[test]
    fn parse_skips_header_and_keeps_order() {
        let pairs = parse_question_source(PROBLEMS.as_bytes()).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("5+5".to_string(), "10".to_string()),
                ("1+1".to_string(), "2".to_string()),
                ("what is 3,4 joined".to_string(), "3,4".to_string()),
            ]
        );
    }

    #[test]
    fn header_only_is_malformed() {
        let err = parse_question_source("question,answer\n".as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::MalformedSource { .. }));
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = parse_question_source("".as_bytes()).unwrap_err();
        assert!(matches!(err, QuizError::MalformedSource { .. }));
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let err = parse_question_source("q,a\n1+1,2\n2+2\n".as_bytes()).unwrap_err();
        match err {
            QuizError::MalformedSource { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 1"), "got: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fields_are_not_trimmed() {
        let pairs = parse_question_source("q,a\n capital , Paris\n".as_bytes()).unwrap();
        assert_eq!(pairs[0], (" capital ".to_string(), " Paris".to_string()));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        std::fs::write(&path, PROBLEMS).unwrap();

        let set = load_question_set(&path).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.questions()[0].id(), 1);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = load_question_set(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, QuizError::SourceUnreadable { .. }));
    }

    #[test]
    fn validate_flags_suspicious_entries() {
        let set = QuestionSet::from_pairs([
            ("5+5", "10"),
            ("5+5", "10"),
            ("", "x"),
            ("blank", ""),
            ("padded", " 4 "),
        ])
        .unwrap();
        let warnings = validate_question_set(&set);

        assert!(warnings
            .iter()
            .any(|w| w.question_id == 2 && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == 3 && w.message.contains("prompt is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == 4 && w.message.contains("answer is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == 5 && w.message.contains("whitespace")));
        assert!(!warnings.iter().any(|w| w.question_id == 1));
    }

    #[test]
    fn validate_clean_set() {
        let set = QuestionSet::from_pairs([("5+5", "10"), ("1+1", "2")]).unwrap();
        assert!(validate_question_set(&set).is_empty());
    }
}
