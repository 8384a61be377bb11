//! Console table rendering for record listings.

use comfy_table::{Cell, Table};

use gradebook_core::grading::evaluate;
use gradebook_core::model::Record;

/// Build the performance table, one row per record in store order.
pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Name", "Roll", "Eng", "Math", "Sci", "Percent", "Grade", "Status",
    ]);

    for record in records {
        let eval = evaluate(record);
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.roll_number),
            Cell::new(record.marks.english),
            Cell::new(record.marks.maths),
            Cell::new(record.marks.science),
            Cell::new(eval.percentage),
            Cell::new(eval.grade),
            Cell::new(eval.status),
        ]);
    }

    table
}
