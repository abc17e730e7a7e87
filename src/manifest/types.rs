//! Manifest value types.

use serde::Serialize;

use super::{format, DISPLAY_MODE, ICON_SIZES, ICON_SRC};

/// Icon resource referenced by a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// URL path of the image.
    pub src: &'static str,
    /// Space-separated `WxH` sizes.
    pub sizes: &'static str,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            src: ICON_SRC,
            sizes: ICON_SIZES,
        }
    }
}

/// Web app manifest returned by `/manifest.json`.
///
/// Field order is the serialization order: `name`, `display`, `icons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDocument {
    /// Application name, verbatim from the request.
    pub name: String,
    /// Display mode, always [`DISPLAY_MODE`].
    pub display: &'static str,
    /// Exactly one icon.
    pub icons: Vec<Icon>,
}

impl ManifestDocument {
    /// Build the manifest for an application name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: DISPLAY_MODE,
            icons: vec![Icon::default()],
        }
    }

    /// Serialize to the body served by `/manifest.json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        format::to_string(self)
    }

    /// Serialize to indented JSON for terminal output.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ManifestDocument {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_fields_in_manifest_order() {
        let doc = ManifestDocument::new("My App");

        assert_eq!(
            doc.to_json().unwrap(),
            r#"{"name": "My App", "display": "standalone", "icons": [{"src": "/static/icon.png", "sizes": "256x256"}]}"#
        );
    }

    #[test]
    fn default_has_empty_name() {
        let doc = ManifestDocument::default();
        assert_eq!(doc.name, "");
        assert_eq!(doc.icons.len(), 1);
    }

    #[test]
    fn name_uses_standard_json_escaping() {
        let doc = ManifestDocument::new("say \"hi\"\n</script>");
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["name"], "say \"hi\"\n</script>");
    }

    #[test]
    fn non_ascii_name_is_escaped() {
        let doc = ManifestDocument::new("café ☕");
        assert!(doc.to_json().unwrap().contains(r#""name": "caf\u00e9 \u2615""#));
    }

    #[test]
    fn pretty_output_keeps_the_same_value() {
        let doc = ManifestDocument::new("My App");
        let compact: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        assert_eq!(compact, pretty);
    }
}
