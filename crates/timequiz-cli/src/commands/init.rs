//! The `timequiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("problems.csv", SAMPLE_PROBLEMS)?;
    write_if_missing("timequiz.toml", SAMPLE_CONFIG)?;

    println!("\nNext steps:");
    println!("  1. Edit problems.csv with your own questions");
    println!("  2. Run: timequiz validate --csv problems.csv");
    println!("  3. Run: timequiz run --csv problems.csv --limit 30");

    Ok(())
}

fn write_if_missing(path: &str, content: &str) -> Result<()> {
    if std::path::Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# timequiz configuration

source = "problems.csv"
time_limit_secs = 30
shuffle = false
# seed = 42
"#;

const SAMPLE_PROBLEMS: &str = "question,answer
5+5,10
7+3,10
1+1,2
8+3,11
1+2,3
8+6,14
3+1,4
1+4,5
5+1,6
2+3,5
3+3,6
2+4,6
5+2,7
\"what 2+2, sqrt(4)\",\"4,2\"
";
