//! The `timequiz run` command.

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use timequiz_core::source::load_question_set;
use timequiz_core::{
    run_timed_session, QuestionSet, Respondent, SessionReport, Shuffler, TimeLimit,
};
use timequiz_respondents::LineRespondent;

use crate::config::{load_config_from, Overrides};

pub async fn execute(
    config_path: Option<PathBuf>,
    overrides: Overrides,
    review: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    config.apply(overrides);

    // Everything that can fail fatally happens before the clock starts.
    let limit = TimeLimit::from_secs(config.time_limit_secs)?;
    let mut questions = load_question_set(&config.source)?;

    if config.shuffle {
        let mut shuffler = config.seed.map_or_else(Shuffler::from_clock, Shuffler::seeded);
        shuffler.shuffle(&mut questions);
        tracing::info!(seed = shuffler.seed(), "shuffled questions");
    } else if config.seed.is_some() {
        eprintln!("Warning: --seed has no effect without --shuffle.");
    }

    let respondent: Box<dyn Respondent> = if json {
        Box::new(LineRespondent::new(
            BufReader::new(io::stdin()),
            tokio::io::stderr(),
        )?)
    } else {
        Box::new(LineRespondent::stdio().context("failed to start input reader")?)
    };

    let presented = questions.clone();
    let report = run_timed_session(questions, limit, respondent).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    if report.timed_out() {
        // The pending prompt has no line break of its own.
        println!();
    }
    println!("{}", report.resolution);
    println!("{}", report.score_line());

    if review {
        println!("\n{}", review_table(&presented, &report));
    }

    Ok(())
}

/// Per-question breakdown in presentation order.
fn review_table(questions: &QuestionSet, report: &SessionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Expected", "Given", "Result"]);

    for q in questions {
        let answer = report
            .outcome
            .answers
            .iter()
            .find(|a| a.question_id == q.id());

        let (given, result) = match answer {
            Some(a) if a.input_error => ("-".to_string(), "input error"),
            Some(a) if a.correct => (a.given.clone(), "correct"),
            Some(a) => (a.given.clone(), "wrong"),
            None => ("-".to_string(), "not reached"),
        };

        table.add_row(vec![
            Cell::new(q.id()),
            Cell::new(q.prompt()),
            Cell::new(q.expected_answer()),
            Cell::new(given),
            Cell::new(result),
        ]);
    }

    table
}
