//! The `quizbank check` command.

use anyhow::Result;
use serde_json::Value;

use quizbank_core::service::CheckAnswerRequest;

use super::GlobalArgs;

pub fn execute(
    global: &GlobalArgs,
    bank_id: &str,
    origin_index: Option<i64>,
    answer: &str,
    json: bool,
) -> Result<()> {
    let config = global.config()?;
    let request = CheckAnswerRequest {
        origin_index,
        submitted_answer: parse_answer_arg(answer),
    };

    let result = super::service(&config).check_answer(bank_id, &request);
    if json {
        return super::print_envelope(result);
    }

    let evaluation = result?;
    println!(
        "{}",
        if evaluation.is_correct { "Correct!" } else { "Incorrect." }
    );
    println!("Type: {}", evaluation.question_type);
    println!(
        "Correct answer: {}",
        serde_json::to_string(&evaluation.correct_answer)?
    );
    println!("Analysis: {}", evaluation.analysis);

    Ok(())
}

/// JSON if it parses, otherwise the raw text as an essay answer.
fn parse_answer_arg(answer: &str) -> Value {
    serde_json::from_str(answer).unwrap_or_else(|_| Value::String(answer.to_string()))
}
