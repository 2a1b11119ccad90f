use anyhow::Result;
use log::info;

use naming_counter::{AssemblyProcessor, CounterOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CounterOptions::default_locations()?;
    info!(
        "Counting names in {} (files containing '{}')",
        options.source_dir.display(),
        options.name_filter
    );

    let processor = AssemblyProcessor::new(options);
    processor.run()?;

    Ok(())
}
