mod attribution;
mod cli;
mod compare;
mod export;
mod walk;

use std::{path::Path, time::Instant};

use iconbundle::bundle::BundleSet;
use log::{debug, info};

const OUTPUT_DIR: &str = "compiled";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::init_cli()?;
    let output = Path::new(OUTPUT_DIR);
    let mut bundles = BundleSet::default();

    debug!("::group::Processed Categories/Icons");
    let start = Instant::now();
    let total = walk::walk_sources(&args.path, &mut bundles).await?;
    debug!("::endgroup::");
    export::export_bundles(output, &bundles).await?;
    let elapsed = start.elapsed();
    attribution::write_attribution(&args.path, output).await?;

    debug!("::group::Duplicate Icon Names");
    for path in &bundles.duplicates {
        debug!("{}", path.display());
    }
    debug!("::endgroup::");

    info!("json files created in {:.3} seconds.", elapsed.as_secs_f64());
    info!(
        "::notice title=Summary Compiled::Parsed {} svg files. Skipped {}. Found {} duplicates.",
        total - bundles.skipped.len(),
        bundles.skipped.len(),
        bundles.duplicates.len()
    );

    compare::compare_with_baseline(&bundles).await?;

    if !bundles.skipped.is_empty() {
        let skipped: Vec<String> = bundles
            .skipped
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        debug!(
            "::notice title=skipped the following files::{}",
            skipped.join(", ")
        );
    }

    Ok(())
}
