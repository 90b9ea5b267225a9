use anyhow::Result;
use env_logger::Env;

use bookdata::data::loader::load_all;
use bookdata::data::summary::summarize;

/// Rows shown in each dataset preview.
const PREVIEW_ROWS: usize = 5;

fn main() -> Result<()> {
    // Default to info so the per-dataset load lines are visible without
    // RUST_LOG being set.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let collection = load_all(None)?;

    println!();
    print!("{}", summarize(&collection));

    for (kind, table) in &collection {
        println!();
        println!("{} preview:", kind.name().to_uppercase());
        print!("{}", table.preview(PREVIEW_ROWS));
    }

    Ok(())
}
