//! Tool metadata types.
//!
//! A [`ToolDescriptor`] is what a tool author writes. A [`LoadedToolInfo`] is
//! the descriptor after discovery, tagged with the identifier derived from
//! where the tool lives.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::ids::string_to_uuid;

/// Namespace mixed into tool UUIDs so they differ from other derived keys.
const TOOL_UUID_NAMESPACE: &str = "tool:";

/// Visual handle for a tool card. The UI decides how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Icon {
    /// A short piece of text or an emoji.
    Glyph(String),
    /// Reference to a bundled asset such as an SVG or a view component.
    Asset(String),
}

/// Static metadata describing one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolDescriptor {
    /// Display name. Not required to be unique.
    pub name: String,

    /// What the tool does.
    pub description: String,

    /// Category labels in display order. Duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Icon for the tool card; `null` means the UI draws a default.
    #[serde(default)]
    pub icon: Option<Icon>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Link to the author's GitHub profile or repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ToolDescriptor {
    /// Tags that belong to the built-in vocabulary, in author order.
    pub fn vocabulary_tags(&self) -> impl Iterator<Item = ToolTag> + '_ {
        self.tags.iter().filter_map(|tag| tag.parse().ok())
    }
}

/// A descriptor together with the identifier it was discovered under.
///
/// The identifier is the join key used by routing and preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedToolInfo {
    pub id: String,

    #[serde(flatten)]
    pub descriptor: ToolDescriptor,
}

impl LoadedToolInfo {
    pub fn new(id: impl Into<String>, descriptor: ToolDescriptor) -> Self {
        Self {
            id: id.into(),
            descriptor,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Stable UUID derived from the identifier.
    pub fn uuid(&self) -> String {
        string_to_uuid(&self.id, TOOL_UUID_NAMESPACE)
    }

    /// GitHub user name from the attribution link, if there is one.
    pub fn github_username(&self) -> Option<&str> {
        self.descriptor.github.as_deref().and_then(github_username)
    }

    /// Case-insensitive match against id, name, description and tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_lowercase().contains(&query)
            || self.descriptor.name.to_lowercase().contains(&query)
            || self.descriptor.description.to_lowercase().contains(&query)
            || self
                .descriptor
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    /// Whether the tool carries `tag` (exact, case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.descriptor
            .tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Extract the user name from a GitHub URL: the first path segment.
///
/// `https://github.com/LYX9527` and `https://github.com/LYX9527/repo` both
/// yield `LYX9527`. Anything without a scheme and host yields `None`.
pub fn github_username(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let (_host, path) = rest.split_once('/')?;
    path.split(['/', '?', '#'])
        .next()
        .filter(|segment| !segment.is_empty())
}

/// The built-in tag vocabulary.
///
/// Tools may use any free-form tag, but only these are counted in tag
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolTag {
    TextProcessing,
    Encoding,
    Generator,
    Converter,
    Design,
    Image,
    Security,
    Utility,
}

impl ToolTag {
    pub const ALL: [ToolTag; 8] = [
        ToolTag::TextProcessing,
        ToolTag::Encoding,
        ToolTag::Generator,
        ToolTag::Converter,
        ToolTag::Design,
        ToolTag::Image,
        ToolTag::Security,
        ToolTag::Utility,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ToolTag::TextProcessing => "text-processing",
            ToolTag::Encoding => "encoding",
            ToolTag::Generator => "generator",
            ToolTag::Converter => "converter",
            ToolTag::Design => "design",
            ToolTag::Image => "image",
            ToolTag::Security => "security",
            ToolTag::Utility => "utility",
        }
    }
}

impl fmt::Display for ToolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("not a built-in tag: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(tags: &[&str]) -> ToolDescriptor {
        ToolDescriptor {
            name: "JSON Formatter".to_string(),
            description: "Format and validate JSON".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: Some(Icon::Glyph("{ }".to_string())),
            author: Some("LYX9527".to_string()),
            email: None,
            github: Some("https://github.com/LYX9527".to_string()),
        }
    }

    #[test]
    fn test_github_username() {
        assert_eq!(github_username("https://github.com/LYX9527"), Some("LYX9527"));
        assert_eq!(
            github_username("https://github.com/Setruth/repo?tab=readme"),
            Some("Setruth")
        );
        assert_eq!(github_username("https://github.com/"), None);
        assert_eq!(github_username("not a url"), None);
    }

    #[test]
    fn test_vocabulary_tags_skip_free_form() {
        let d = descriptor(&["converter", "JSON", "utility", "converter"]);
        let tags: Vec<_> = d.vocabulary_tags().collect();
        assert_eq!(
            tags,
            vec![ToolTag::Converter, ToolTag::Utility, ToolTag::Converter]
        );
    }

    #[test]
    fn test_descriptor_json_shape() {
        let json = serde_json::json!({
            "name": "Regex Tester",
            "description": "Test regular expressions",
            "tags": ["text-processing"],
            "icon": null
        });
        let d: ToolDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(d.icon, None);
        assert_eq!(d.author, None);

        let with_icon: ToolDescriptor = serde_json::from_value(serde_json::json!({
            "name": "Hash",
            "description": "Hashes",
            "icon": {"kind": "asset", "value": "hash-generator/icon.svg"}
        }))
        .unwrap();
        assert_eq!(
            with_icon.icon,
            Some(Icon::Asset("hash-generator/icon.svg".to_string()))
        );
        assert!(with_icon.tags.is_empty());
    }

    #[test]
    fn test_loaded_info_flattens_descriptor() {
        let info = LoadedToolInfo::new("json-formatter", descriptor(&["utility"]));
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["id"], "json-formatter");
        assert_eq!(value["name"], "JSON Formatter");
        assert!(value.get("email").is_none());
    }

    #[test]
    fn test_matches_and_has_tag() {
        let info = LoadedToolInfo::new("json-formatter", descriptor(&["Utility"]));
        assert!(info.matches("json"));
        assert!(info.matches("VALIDATE"));
        assert!(info.matches("util"));
        assert!(info.matches(""));
        assert!(!info.matches("yaml"));
        assert!(info.has_tag("utility"));
        assert!(!info.has_tag("util"));
    }

    #[test]
    fn test_uuid_follows_identifier() {
        let a = LoadedToolInfo::new("json-formatter", descriptor(&[]));
        let mut b = a.clone();
        b.descriptor.name = "Renamed".to_string();
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.github_username(), Some("LYX9527"));
    }

    #[test]
    fn test_tag_keys_use_vocabulary_spelling() {
        let mut stats = std::collections::BTreeMap::new();
        stats.insert(ToolTag::TextProcessing, 2usize);
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["text-processing"], 2);
        assert_eq!(format!("[{:<8}]", ToolTag::Image), "[image   ]");
    }
}
