use crate::config::Config;
use crate::data::allow_list::AllowList;
use crate::data::filter::{filter_catalog, FilterSummary};
use crate::data::loader::load_catalog;
use crate::data::writer::write_catalog;
use crate::error::Result;

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub filter: FilterSummary,
    pub bytes_written: usize,
}

/// Load the catalog, keep the ship records, write them out.
///
/// Nothing is written unless every earlier stage succeeded.
pub fn run(config: &Config) -> Result<RunSummary> {
    let catalog = load_catalog(&config.input, config.byte_order)?;
    log::info!(
        "loaded {} records from {}",
        catalog.len(),
        config.input.display()
    );

    let (ships, filter) = filter_catalog(&catalog, &AllowList::ships());
    log::info!(
        "kept {} ship records, dropped {}",
        filter.retained,
        filter.dropped()
    );

    let bytes_written = write_catalog(&config.output, &ships, config.output_style())?;
    log::info!(
        "wrote {} ({} bytes)",
        config.output.display(),
        bytes_written
    );

    Ok(RunSummary {
        filter,
        bytes_written,
    })
}
