use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{
    record::{HeightVariant, IconRecord, Style, StyleBundle},
    svg::SvgIcon,
};

/// The accumulator for one compilation run: five style bundles plus the
/// skip and duplicate logs.
///
/// Owned by the orchestrator and threaded through the pipeline stages; the
/// logs are append-only and used for reporting, never for correctness.
#[derive(Debug, Clone)]
pub struct BundleSet {
    bundles: IndexMap<Style, StyleBundle>,
    pub skipped: Vec<PathBuf>,
    pub duplicates: Vec<PathBuf>,
}

impl Default for BundleSet {
    fn default() -> Self {
        Self {
            bundles: Style::ALL
                .into_iter()
                .map(|style| (style, StyleBundle::default()))
                .collect(),
            skipped: Vec::default(),
            duplicates: Vec::default(),
        }
    }
}

impl BundleSet {
    pub fn bundle(&self, style: Style) -> &StyleBundle {
        // Every style is seeded at construction
        &self.bundles[&style]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Style, &StyleBundle)> {
        self.bundles.iter().map(|(style, bundle)| (*style, bundle))
    }

    /// Folds one extracted icon into its style's bundle.
    ///
    /// First-seen-wins for a given height: an existing height entry is never
    /// overwritten. A second category for the same name, or a new size
    /// variant for an existing name, lands in the duplicates log.
    pub fn merge(&mut self, file: &Path, style: Style, category: &str, name: &str, icon: SvgIcon) {
        let variant = HeightVariant {
            width: icon.width,
            path: icon.markup,
        };
        let bundle = self.bundles.entry(style).or_default();

        let Some(record) = bundle.get_mut(name) else {
            bundle.insert(
                name.to_owned(),
                IconRecord::new(name, category, icon.height, variant),
            );
            return;
        };

        if !record.keywords.iter().any(|keyword| keyword == category) {
            if !record.keywords.is_empty() {
                // The same icon name exists under another category
                self.duplicates.push(file.to_owned());
            }
            record.keywords.push(category.to_owned());
        }
        if !record.heights.contains_key(&icon.height) {
            record.heights.insert(icon.height, variant);
            self.duplicates.push(file.to_owned());
        }
    }
}
