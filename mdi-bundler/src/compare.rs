use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use iconbundle::{
    bundle::BundleSet,
    record::{Style, StyleBundle},
};
use log::{debug, info};

/// Previously compiled bundles shipped inside the sphinx-design repository.
const BASELINE_DIR: &str = "sphinx-design/sphinx_design/compiled";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub added: usize,
    pub removed: usize,
    pub grew: usize,
    pub shrank: usize,
    pub added_names: Vec<String>,
    pub removed_names: Vec<String>,
}

impl ComparisonSummary {
    /// Folds the differences between a freshly built bundle and its baseline
    /// counterpart into the summary.
    fn diff_style(&mut self, style: Style, new: &StyleBundle, old: &StyleBundle) {
        for (name, record) in new {
            let Some(old_record) = old.get(name) else {
                self.added += 1;
                self.added_names.push(format!("{style}/{name}"));
                continue;
            };
            if record.heights.len() > old_record.heights.len() {
                self.grew += 1;
            } else if record.heights.len() < old_record.heights.len() {
                self.shrank += 1;
            }
        }
        for name in old.keys() {
            if !new.contains_key(name) {
                self.removed += 1;
                self.removed_names.push(format!("{style}/{name}"));
            }
        }
    }
}

fn locate_baseline() -> anyhow::Result<PathBuf> {
    let baseline = PathBuf::from(BASELINE_DIR);
    if baseline.exists() {
        return Ok(baseline);
    }
    let parent = Path::new("..").join(BASELINE_DIR);
    if parent.exists() {
        return Ok(parent);
    }
    bail!("Failed to locate previously compiled json")
}

/// Diffs the freshly built bundles against the previously compiled baseline
/// and logs a comparison summary.
pub async fn compare_with_baseline(bundles: &BundleSet) -> anyhow::Result<()> {
    let baseline = locate_baseline()?;
    let mut summary = ComparisonSummary::default();

    for (style, bundle) in bundles.iter() {
        let path = baseline.join(style.json_name());
        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read baseline bundle: {path:?}"))?;
        let old: StyleBundle = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse baseline bundle: {path:?}"))?;
        summary.diff_style(style, bundle, &old);
    }

    info!(
        "::notice title=Summary Comparison::{} new icons added. {} icons have new sizes. \
         {} icons' sizes were removed. {} icons were replaced or removed.",
        summary.added, summary.grew, summary.shrank, summary.removed
    );
    if !summary.added_names.is_empty() {
        debug!("::group::New Icon Names");
        for name in &summary.added_names {
            debug!("{name}");
        }
        debug!("::endgroup::");
    }
    if !summary.removed_names.is_empty() {
        debug!("::group::Removed Icon Names");
        for name in &summary.removed_names {
            debug!("{name}");
        }
        debug!("::endgroup::");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use iconbundle::record::{HeightVariant, IconRecord};

    use super::*;

    fn record(name: &str, heights: &[&str]) -> IconRecord {
        IconRecord {
            name: name.to_owned(),
            keywords: vec!["action".to_owned()],
            heights: heights
                .iter()
                .map(|height| {
                    (
                        (*height).to_owned(),
                        HeightVariant {
                            width: 24,
                            path: "p".to_owned(),
                        },
                    )
                })
                .collect(),
        }
    }

    fn bundle(records: Vec<IconRecord>) -> StyleBundle {
        records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect()
    }

    #[test]
    fn diff_counts_added_and_removed() {
        let new = bundle(vec![record("home", &["24"]), record("share", &["24"])]);
        let old = bundle(vec![record("home", &["24"]), record("alarm", &["24"])]);

        let mut summary = ComparisonSummary::default();
        summary.diff_style(Style::Regular, &new, &old);

        assert_eq!(summary.added, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.added_names, ["regular/share"]);
        assert_eq!(summary.removed_names, ["regular/alarm"]);
        assert_eq!(summary.grew, 0);
        assert_eq!(summary.shrank, 0);
    }

    #[test]
    fn diff_counts_size_changes() {
        let new = bundle(vec![
            record("home", &["24", "48"]),
            record("share", &["24"]),
        ]);
        let old = bundle(vec![
            record("home", &["24"]),
            record("share", &["24", "36"]),
        ]);

        let mut summary = ComparisonSummary::default();
        summary.diff_style(Style::Outlined, &new, &old);

        assert_eq!(summary.grew, 1);
        assert_eq!(summary.shrank, 1);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.removed, 0);
    }

    #[test]
    fn diff_accumulates_across_styles() {
        let new = bundle(vec![record("home", &["24"])]);
        let old = bundle(vec![]);

        let mut summary = ComparisonSummary::default();
        summary.diff_style(Style::Regular, &new, &old);
        summary.diff_style(Style::Round, &new, &old);

        assert_eq!(summary.added, 2);
        assert_eq!(summary.added_names, ["regular/home", "round/home"]);
    }
}
