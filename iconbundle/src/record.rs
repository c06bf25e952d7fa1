use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The directory marker shared by every scheme folder, e.g.
/// `materialiconsround`. Whatever remains after deleting it names the style.
const SCHEME_MARKER: &str = "materialicons";

/// One of the five Material Icons visual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Regular,
    Outlined,
    Round,
    Sharp,
    Twotone,
}

impl Style {
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Outlined,
        Self::Round,
        Self::Sharp,
        Self::Twotone,
    ];

    /// Derives the style from a scheme directory name.
    ///
    /// Deleting the `materialicons` marker leaves either nothing (the regular
    /// style) or the style's name. Anything else is an unknown scheme.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme.replace(SCHEME_MARKER, "").as_str() {
            "" => Some(Self::Regular),
            "outlined" => Some(Self::Outlined),
            "round" => Some(Self::Round),
            "sharp" => Some(Self::Sharp),
            "twotone" => Some(Self::Twotone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Outlined => "outlined",
            Self::Round => "round",
            Self::Sharp => "sharp",
            Self::Twotone => "twotone",
        }
    }

    /// The bundle file name for this style, e.g. `material_round.json`.
    pub fn json_name(&self) -> String {
        format!("material_{self}.json")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The path data of one icon at one declared pixel height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightVariant {
    pub width: u32,
    pub path: String,
}

/// One icon within a style bundle.
///
/// Heights are keyed by the declared height attribute string, in the order
/// the size variants were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: String,
    pub keywords: Vec<String>,
    pub heights: IndexMap<String, HeightVariant>,
}

impl IconRecord {
    pub fn new(name: &str, category: &str, height: String, variant: HeightVariant) -> Self {
        Self {
            name: name.to_owned(),
            keywords: vec![category.to_owned()],
            heights: IndexMap::from([(height, variant)]),
        }
    }
}

/// A style's mapping from icon name to record, in insertion order.
pub type StyleBundle = IndexMap<String, IconRecord>;
