//! The `gradebook add` command.

use anyhow::Result;

use gradebook_core::model::{Marks, Record};
use gradebook_core::{Store, StoreConfig};

pub fn execute(
    config: StoreConfig,
    roll: i64,
    name: String,
    english: Option<f64>,
    maths: Option<f64>,
    science: Option<f64>,
    absent: bool,
) -> Result<()> {
    let record = if absent {
        Record::absent(roll, name)
    } else {
        let marks = Marks::new(
            mark("english", english)?,
            mark("maths", maths)?,
            mark("science", science)?,
        );
        Record::present(roll, name, marks)
    };

    let mut store = Store::open(config)?;
    let name = record.name.clone();
    store.add_record(record)?;

    println!(
        "Record added: {name} (roll {roll}), {} record(s) in {}",
        store.len(),
        store.config().data_path.display()
    );
    Ok(())
}

fn mark(subject: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => anyhow::bail!("invalid {subject} mark: {v}"),
        None => anyhow::bail!("missing --{subject} mark (or pass --absent)"),
    }
}
