use super::domain::{Answer, AnswerValue, QuestionId};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raised when an answer file cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "questionId", alias = "question_id")]
    question_id: String,
    answer: String,
}

impl AnswerRow {
    fn into_answer(self) -> Answer {
        let raw = normalize_cell(&self.answer);
        let answer = match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => AnswerValue::Number(value),
            _ => AnswerValue::Text(raw),
        };
        Answer {
            question_id: QuestionId(normalize_cell(&self.question_id)),
            answer,
        }
    }
}

fn normalize_cell(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

/// Reads recorded answers from CSV exports or JSON arrays.
///
/// CSV files carry a `questionId,answer` header. Cells that parse as a number become
/// likert values; everything else is kept as a choice string.
pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Answer>, AnswerImportError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(BufReader::new(file))
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = Vec::new();
        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            if row.question_id.trim().is_empty() {
                continue;
            }
            answers.push(row.into_answer());
        }
        Ok(answers)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerImportError> {
        let answers: Vec<Answer> = serde_json::from_reader(reader)?;
        Ok(answers)
    }
}
