//! The `gradebook list` command.

use anyhow::Result;

use gradebook_core::{Store, StoreConfig};

use crate::table::records_table;

pub fn execute(config: StoreConfig) -> Result<()> {
    let store = Store::open(config)?;

    if store.is_empty() {
        println!("No records available.");
        return Ok(());
    }

    println!("{}", records_table(store.list_records()));
    println!("{} record(s)", store.len());
    Ok(())
}
