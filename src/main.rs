use anyhow::{anyhow, Context};
use range_search::RangeBinarySearch;
use tracing::Level;

/// Environment variable holding the log level, e.g. `trace` or `warn`.
const LOG_LEVEL_ENV: &str = "RANGE_SEARCH_LOG";

/// Usage: range-search <key> <value>...
///
/// Prints the indexes of `key` among the (sorted) values, or `[-1]` if it does not occur.
fn main() -> anyhow::Result<()> {
    let level = match std::env::var(LOG_LEVEL_ENV) {
        Ok(level) => level
            .parse::<Level>()
            .map_err(|e| anyhow!("invalid {}={:?}: {}", LOG_LEVEL_ENV, level, e))?,
        Err(_) => Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let key = args
        .next()
        .ok_or_else(|| anyhow!("usage: range-search <key> <value>..."))?;
    let key = key
        .parse::<i64>()
        .with_context(|| format!("key {:?} is not an integer", key))?;
    let values = args
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("value {:?} is not an integer", arg))
        })
        .collect::<anyhow::Result<Vec<i64>>>()?;

    let span = tracing::span!(Level::INFO, "range_search_cli");
    let search = RangeBinarySearch::new(&span, Some(values), key)?;
    let found = search.find();
    tracing::info!(
        "searched {} values sorted {} for key {}: {} occurrence(s)",
        search.search_space().len(),
        search.direction(),
        key,
        found.len()
    );

    println!("{found}");
    Ok(())
}
