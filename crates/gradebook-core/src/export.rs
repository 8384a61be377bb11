//! CSV report generation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{GradebookError, Result};
use crate::grading::evaluate;
use crate::model::Record;

/// Header row of the exported report.
pub const REPORT_HEADER: [&str; 8] = [
    "Name",
    "Roll No",
    "English",
    "Maths",
    "Science",
    "Percentage",
    "Grade",
    "Status",
];

/// Write the report for `records` to any writer, header first.
pub fn write_report<W: Write>(
    records: &[Record],
    writer: W,
) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;

    for record in records {
        let eval = evaluate(record);
        wtr.write_record([
            record.name.clone(),
            record.roll_number.to_string(),
            record.marks.english.to_string(),
            record.marks.maths.to_string(),
            record.marks.science.to_string(),
            eval.percentage.to_string(),
            eval.grade.to_string(),
            eval.status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn export_csv(records: &[Record], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GradebookError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| GradebookError::io(path, e))?;
    write_report(records, file).map_err(|source| GradebookError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rows = records.len(), "exported report");
    Ok(())
}
