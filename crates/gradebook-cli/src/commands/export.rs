//! The `gradebook export` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::{Store, StoreConfig};

pub fn execute(config: StoreConfig, output: Option<PathBuf>) -> Result<()> {
    let store = Store::open(config)?;

    let path = match output {
        Some(path) => {
            store.export_report_to(&path)?;
            path
        }
        None => store.export_report()?,
    };

    println!(
        "Report exported to {} ({} record(s))",
        path.display(),
        store.len()
    );
    Ok(())
}
