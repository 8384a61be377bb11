//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE_NAME, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE_NAME}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to choose where records are kept");
    println!("  2. Run: gradebook            (log in and use the menu)");
    println!("  3. Run: gradebook export     (write the CSV report)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# JSON file holding every student record.
data_path = "students.json"

# CSV report written by `gradebook export` and menu option 3.
report_path = "student_report.csv"

# Reject a new record whose roll number is already stored.
enforce_unique_rolls = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::StoreConfig;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config =
            StoreConfig::from_toml_str(SAMPLE_CONFIG, Path::new(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, StoreConfig::default());
    }
}
