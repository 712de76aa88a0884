//! The `quizbank problems` command.

use anyhow::Result;

use quizbank_core::format::render_blanks;
use quizbank_core::model::QuestionType;
use quizbank_core::select::PracticeMode;
use quizbank_core::service::ProblemsRequest;

use super::GlobalArgs;

pub fn execute(
    global: &GlobalArgs,
    bank_id: &str,
    mode: Option<String>,
    question_type: Option<String>,
    shuffle: bool,
    json: bool,
) -> Result<()> {
    let config = global.config()?;
    let request = ProblemsRequest {
        mode: mode.map(PracticeMode::from).unwrap_or(config.default_mode),
        question_type: question_type.unwrap_or_else(|| config.default_type.clone()),
        shuffle,
    };

    if request.mode == PracticeMode::ByType && request.question_type.parse::<QuestionType>().is_err() {
        tracing::warn!(
            "'{}' is not a question type; no questions will match",
            request.question_type
        );
    }

    let result = super::service(&config).problems(bank_id, &request);
    if json {
        return super::print_envelope(result);
    }

    let questions = result?;
    for q in &questions {
        let content = render_blanks(&q.question.content, &q.question.answer, |i| {
            format!("____({})", i + 1)
        });
        println!("[{}] ({}) {}", q.origin_index, q.question_type, content.trim());
        if let Some(options) = &q.question.options {
            for (i, option) in options.iter().enumerate() {
                println!("    {i}. {option}");
            }
        }
    }
    println!("{} question(s)", questions.len());

    Ok(())
}
