use allen_lib::{CompositionTable, checks::check_table};
use anyhow::{Result, bail};
use log::info;

/// Build the table from scratch, in parallel, and check it against the laws
/// of the algebra and against the shared table.
pub fn verify_view() -> Result<String> {
    let table = CompositionTable::build_parallel()?;
    check_table(&table)?;
    if &table != CompositionTable::shared()? {
        bail!("parallel and sequential builds differ");
    }
    info!("composition table verified");

    let min = table.iter().map(|(_, _, s)| s.len()).min().unwrap_or(0);
    let max = table.iter().map(|(_, _, s)| s.len()).max().unwrap_or(0);
    Ok(format!(
        "ok: {} compositions, {} relations, between {} and {} per composition\n",
        table.iter().count(),
        table.total_size(),
        min,
        max,
    ))
}
