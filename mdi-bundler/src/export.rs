use std::path::Path;

use anyhow::Context;
use iconbundle::bundle::BundleSet;
use log::info;

/// Writes one indented JSON bundle per style into `output`, creating the
/// directory if absent and overwriting any previous contents.
pub async fn export_bundles(output: &Path, bundles: &BundleSet) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(output)
        .await
        .with_context(|| format!("Failed to create output directory: {output:?}"))?;

    for (style, bundle) in bundles.iter() {
        let json_name = style.json_name();
        info!("dumping {json_name}");
        let json = serde_json::to_string_pretty(bundle)
            .with_context(|| format!("Failed to serialize the {style} bundle"))?;
        let path = output.join(&json_name);
        tokio::fs::write(&path, json + "\n")
            .await
            .with_context(|| format!("Failed to write bundle: {path:?}"))?;
    }

    Ok(())
}
