//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use timequiz_core::source::{load_question_set, validate_question_set};

pub fn execute(csv: PathBuf) -> Result<()> {
    let set = load_question_set(&csv)?;
    println!("Question source: {} ({} questions)", csv.display(), set.len());

    let warnings = validate_question_set(&set);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.question_id, w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
