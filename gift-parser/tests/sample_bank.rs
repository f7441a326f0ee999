//! End-to-end run over `fixtures/sample.gift`

use gift_parser::gift::ast::QuestionType;
use gift_parser::gift::extraction::SkipReason;
use gift_parser::gift::formats::summarize;
use gift_parser::gift::transforms::standard::BYTES_TO_QUESTIONS;
use gift_parser::{OutputFormat, QuestionBankLoader};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn loader() -> QuestionBankLoader {
    QuestionBankLoader::from_path(fixture("sample.gift")).unwrap()
}

#[test]
fn parses_every_well_formed_block() {
    let report = loader().parse_report().unwrap();
    let kinds: Vec<QuestionType> = report.questions.iter().map(|q| q.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            QuestionType::ShortAnswer,
            QuestionType::MultiChoice,
            QuestionType::Numerical,
            QuestionType::Numerical,
            QuestionType::Matching,
            QuestionType::TrueFalse,
            QuestionType::Description,
        ]
    );
    assert_eq!(report.ignored_directives, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingClosingBrace);
    assert_eq!(report.skipped[0].source, "Broken question {T");
}

#[test]
fn category_runs_follow_directives() {
    let report = loader().parse_report().unwrap();
    let runs: Vec<(&str, usize)> = report
        .category_runs()
        .iter()
        .map(|run| (run.category, run.questions.len()))
        .collect();
    assert_eq!(runs, vec![("Geography", 2), ("Math", 5)]);
}

#[test]
fn static_pipeline_agrees_with_loader() {
    let bytes = std::fs::read(fixture("sample.gift")).unwrap();
    let report = BYTES_TO_QUESTIONS.run(bytes).unwrap();
    assert_eq!(report, loader().parse_report().unwrap());
}

#[test]
fn cp1251_source_decodes() {
    // "$CATEGORY: Тест\n\nДа? {T}" in windows-1251
    let mut bytes = b"$CATEGORY: ".to_vec();
    bytes.extend([0xD2, 0xE5, 0xF1, 0xF2]);
    bytes.extend(b"\n\n");
    bytes.extend([0xC4, 0xE0]);
    bytes.extend(b"? {T}");

    let questions = QuestionBankLoader::from_bytes(bytes).parse().unwrap();
    assert_eq!(questions[0].category, "Тест");
    assert_eq!(questions[0].text, "Да?");
}

#[test]
fn summary_snapshot() {
    let questions = loader().parse().unwrap();
    let summary = summarize(&questions);
    insta::assert_snapshot!(summary.trim_end(), @r"
== Geography ==
1. [shortanswer] Capital
    = Paris
    = Lutetia
2. [multichoice] Which of these are planets?
    [x] Mars (100%)
    [ ] Pluto -- Dwarf planet since 2006
    [ ] The Moon

== Math ==
3. [numerical] Two plus two
    = 4
4. [numerical] Pi to two places
    = 3.14 ± 0.01
5. [matching] Match the symbols
    H -> Hydrogen
    O -> Oxygen
6. [truefalse] The earth is flat.
    answer: false
7. [description] Intro

Total questions: 7
");
}

#[test]
fn json_output_is_a_question_array() {
    let questions = loader().parse().unwrap();
    let json = OutputFormat::Json.render(&questions, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 7);
    assert_eq!(array[0]["title"], "Capital");
    assert_eq!(array[0]["type"], "shortanswer");
    assert_eq!(array[1]["answers"][1]["feedback"], "Dwarf planet since 2006");
    assert_eq!(array[3]["answers"][0]["text"], "3.14 ± 0.01");
}
