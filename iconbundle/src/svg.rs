use std::{borrow::Cow, path::Path, sync::LazyLock};

use anyhow::Context;
use regex::Regex;

/// Matches a self-closing element whose tag name is at least 4 characters.
static SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w{4,})(.*?)/>").unwrap());

/// A validated fragment extracted from one SVG asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgIcon {
    /// The declared height attribute, kept as the raw digit string.
    pub height: String,
    pub width: u32,
    /// The inner markup of the `<svg>` element with self-closing tags
    /// rewritten to open/close pairs.
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Icon(SvgIcon),
    /// The asset carried a non-numeric or missing dimension and contributes
    /// nothing to any bundle.
    Skipped,
}

/// Rewrites every self-closing element to an explicit open/close pair.
///
/// A single substitution pass can leave adjacent matches untransformed, so
/// the pass repeats until a fixed point is reached. Tags shorter than 4
/// characters are left alone.
pub fn normalize_markup(markup: &str) -> String {
    let mut current = markup.to_owned();
    loop {
        match SELF_CLOSING.replace_all(&current, "<${1}${2}></${1}>") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => current = next,
        }
    }
    current
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Extracts the icon payload from one SVG document.
///
/// Malformed XML and documents without an `<svg>` element are hard errors;
/// a non-numeric or missing dimension yields [`Extraction::Skipped`].
pub fn extract_from_str(text: &str) -> anyhow::Result<Extraction> {
    let document = roxmltree::Document::parse(text).context("Failed to parse SVG document")?;
    // Compare local names only so a declared xmlns doesn't hide the root
    let svg = document
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "svg")
        .context("Document has no <svg> element")?;

    let height = svg.attribute("height").unwrap_or_default();
    let width = svg.attribute("width").unwrap_or_default();
    if !is_decimal(height) || !is_decimal(width) {
        return Ok(Extraction::Skipped);
    }

    // Everything inside the <svg> wrapper, recovered byte-for-byte from the
    // source text so entities and whitespace survive as written.
    let markup: String = svg.children().map(|child| &text[child.range()]).collect();

    Ok(Extraction::Icon(SvgIcon {
        height: height.to_owned(),
        width: width
            .parse()
            .with_context(|| format!("Width out of range: {width}"))?,
        markup: normalize_markup(&markup),
    }))
}

/// Reads and extracts one SVG asset from disk.
pub async fn extract(path: &Path) -> anyhow::Result<Extraction> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read SVG file at: {path:?}"))?;
    extract_from_str(&text).with_context(|| format!("Failed to extract SVG at: {path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_self_closing() {
        assert_eq!(
            normalize_markup(r#"<path d="M0 0h24v24H0z"/>"#),
            r#"<path d="M0 0h24v24H0z"></path>"#
        );
    }

    #[test]
    fn normalize_adjacent_tags() {
        let markup = r#"<path d="a"/><rect width="2"/><circle r="1"/>"#;
        assert_eq!(
            normalize_markup(markup),
            r#"<path d="a"></path><rect width="2"></rect><circle r="1"></circle>"#
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_markup(r#"<path d="a"/><circle r="1"/>"#);
        assert_eq!(normalize_markup(&once), once);
    }

    #[test]
    fn normalize_keeps_short_tags() {
        let markup = r#"<g fill="none"/>"#;
        assert_eq!(normalize_markup(markup), markup);
    }

    #[test]
    fn extract_valid_asset() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" height="24" viewBox="0 0 24 24" width="24"><path d="M0 0h24v24H0z" fill="none"/><path d="M12 2L2 12h3v8h6v-6h2v6h6v-8h3z"/></svg>"#;
        let Extraction::Icon(icon) = extract_from_str(svg).unwrap() else {
            panic!("asset should not be skipped");
        };
        assert_eq!(icon.height, "24");
        assert_eq!(icon.width, 24);
        assert_eq!(
            icon.markup,
            r#"<path d="M0 0h24v24H0z" fill="none"></path><path d="M12 2L2 12h3v8h6v-6h2v6h6v-8h3z"></path>"#
        );
    }

    #[test]
    fn extract_skips_unit_suffix() {
        let svg = r#"<svg height="24px" width="24"><path d="M0 0z"/></svg>"#;
        assert_eq!(extract_from_str(svg).unwrap(), Extraction::Skipped);
    }

    #[test]
    fn extract_skips_missing_width() {
        let svg = r#"<svg height="24"><path d="M0 0z"/></svg>"#;
        assert_eq!(extract_from_str(svg).unwrap(), Extraction::Skipped);
    }

    #[test]
    fn extract_skips_signed_and_float() {
        let negative = r#"<svg height="-24" width="24"/>"#;
        assert_eq!(extract_from_str(negative).unwrap(), Extraction::Skipped);
        let float = r#"<svg height="24" width="24.5"/>"#;
        assert_eq!(extract_from_str(float).unwrap(), Extraction::Skipped);
    }

    #[test]
    fn extract_rejects_malformed_xml() {
        assert!(extract_from_str("<svg height=\"24\"").is_err());
    }

    #[test]
    fn extract_rejects_missing_svg_element() {
        assert!(extract_from_str("<html></html>").is_err());
    }

    #[tokio::test]
    async fn extract_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("24px.svg");
        std::fs::write(
            &path,
            r#"<svg height="18" width="18"><path d="M0 0h18v18H0z"/></svg>"#,
        )
        .unwrap();

        let Extraction::Icon(icon) = extract(&path).await.unwrap() else {
            panic!("asset should not be skipped");
        };
        assert_eq!(icon.height, "18");
        assert_eq!(icon.width, 18);
        assert_eq!(icon.markup, r#"<path d="M0 0h18v18H0z"></path>"#);
    }
}
