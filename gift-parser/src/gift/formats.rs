//! Output formats for parsed question banks
//!
//! `json` and `yaml` serialize the question list as-is. `summary` is a plain-text
//! listing grouped by contiguous category runs, meant for eyeballing a bank in a
//! terminal.

use crate::gift::ast::{Question, QuestionBody};
use crate::gift::error::{GiftError, Result};
use crate::gift::parsing::category_runs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Summary,
}

impl OutputFormat {
    /// Every format, in the order offered on the command line.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Summary];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Summary => "summary",
        }
    }

    /// Render questions in this format. `pretty` only affects JSON.
    pub fn render(&self, questions: &[Question], pretty: bool) -> Result<String> {
        match self {
            OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(questions)?),
            OutputFormat::Json => Ok(serde_json::to_string(questions)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(questions)?),
            OutputFormat::Summary => Ok(summarize(questions)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(GiftError::UnknownFormat(s.to_string())),
        }
    }
}

/// Plain-text listing, one header per category run, numbering continuous.
pub fn summarize(questions: &[Question]) -> String {
    let mut out = String::new();
    let mut number = 0;
    for run in category_runs(questions) {
        out.push_str(&format!("== {} ==\n", run.category));
        for question in run.questions {
            number += 1;
            out.push_str(&format!("{}. [{}] {}\n", number, question.kind(), question.label()));
            for line in answer_lines(&question.body) {
                out.push_str("    ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out.push_str(&format!("Total questions: {}\n", questions.len()));
    out
}

fn answer_lines(body: &QuestionBody) -> Vec<String> {
    match body {
        QuestionBody::Description => Vec::new(),
        QuestionBody::TrueFalse { correct } => vec![format!("answer: {correct}")],
        QuestionBody::Numerical { answers } => {
            answers.iter().map(|answer| format!("= {}", answer.text)).collect()
        }
        QuestionBody::Matching { answers } => answers
            .iter()
            .map(|pair| format!("{} -> {}", pair.left, pair.right))
            .collect(),
        QuestionBody::MultiChoice { answers } => answers
            .iter()
            .map(|choice| {
                let mark = if choice.correct { "[x]" } else { "[ ]" };
                let mut line = format!("{mark} {}", choice.text);
                if let Some(percentage) = choice.percentage {
                    line.push_str(&format!(" ({percentage}%)"));
                }
                if let Some(feedback) = &choice.feedback {
                    line.push_str(&format!(" -- {feedback}"));
                }
                line
            })
            .collect(),
        QuestionBody::ShortAnswer { answers } => {
            answers.iter().map(|answer| format!("= {}", answer.text)).collect()
        }
    }
}
