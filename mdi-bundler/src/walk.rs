use std::path::Path;

use anyhow::Context;
use iconbundle::{
    bundle::BundleSet,
    record::Style,
    svg::{self, Extraction},
};
use log::{debug, warn};
use walkdir::WalkDir;

/// Splits a path relative to the `src` root into its category, name, and
/// scheme segments. Returns `None` unless the path has exactly three
/// directory segments before the file name.
fn split_segments(relative: &Path) -> Option<(&str, &str, &str)> {
    let mut segments = relative.iter();
    let category = segments.next()?.to_str()?;
    let name = segments.next()?.to_str()?;
    let scheme = segments.next()?.to_str()?;
    segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    Some((category, name, scheme))
}

/// Walks the `src` tree of SVG assets, merging each one into `bundles`.
///
/// Returns the total number of SVG files visited, including ones that were
/// later skipped.
pub async fn walk_sources(root: &Path, bundles: &mut BundleSet) -> anyhow::Result<usize> {
    let src_root = root.join("src");
    let mut total = 0;
    let mut current_category = String::new();
    let mut current_icon = String::new();

    for entry in WalkDir::new(&src_root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk icon sources under: {src_root:?}"))?;
        if !entry.file_type().is_file() || entry.path().extension() != Some("svg".as_ref()) {
            continue;
        }
        total += 1;

        let relative = entry
            .path()
            .strip_prefix(&src_root)
            .with_context(|| format!("Asset escapes the source root: {:?}", entry.path()))?;
        let Some((category, name, scheme)) = split_segments(relative) else {
            warn!(
                "Skipping {:?}: expected category/name/scheme/size.svg",
                entry.path()
            );
            bundles.skipped.push(entry.path().to_owned());
            continue;
        };
        let style = Style::from_scheme(scheme)
            .with_context(|| format!("Unknown icon scheme {scheme:?} at: {:?}", entry.path()))?;

        match svg::extract(entry.path()).await? {
            Extraction::Skipped => bundles.skipped.push(entry.path().to_owned()),
            Extraction::Icon(icon) => {
                if category != current_category {
                    current_category = category.to_owned();
                    debug!("parsing category: {category}");
                }
                if name != current_icon {
                    current_icon = name.to_owned();
                    debug!("\ticon: {name}");
                }
                bundles.merge(entry.path(), style, category, name, icon);
            }
        }
    }

    Ok(total)
}
