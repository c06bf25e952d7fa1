use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, Utc};
use log::info;

const PLACEHOLDER: &str = "Copyright [yyyy] [name of copyright owner]";
const OWNER: &str = "Google";
const OUTPUT_NAME: &str = "material-icons_LICENSE";

/// Fills in the Apache-2.0 attribution placeholder with the given year and
/// the fixed owner, keeping every other line as written.
fn stamp_attribution(template: &str, year: i32) -> anyhow::Result<String> {
    let mut lines: Vec<&str> = template.lines().collect();
    let (index, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains(PLACEHOLDER))
        .map(|(index, line)| (index, *line))
        .context("Failed to find the attribution line in the license template")?;

    let attribution = line
        .replace("[yyyy]", &year.to_string())
        .replace("[name of copyright owner]", OWNER);
    lines[index] = &attribution;

    Ok(lines.join("\n"))
}

/// Rewrites the redistribution license, stamped with the current UTC year.
pub async fn write_attribution(root: &Path, output: &Path) -> anyhow::Result<()> {
    let license_path = root.join("LICENSE");
    let template = tokio::fs::read_to_string(&license_path)
        .await
        .with_context(|| format!("Failed to read license template at: {license_path:?}"))?;

    info!("Time-stamping attribution notice");
    let stamped = stamp_attribution(&template, Utc::now().year())?;

    let output_path = output.join(OUTPUT_NAME);
    tokio::fs::write(&output_path, stamped)
        .await
        .with_context(|| format!("Failed to write attribution notice: {output_path:?}"))?;

    Ok(())
}
