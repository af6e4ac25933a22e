//! Definition file loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::MenuDefinition;

/// Non-fatal definition warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DefinitionWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Serialization formats accepted for definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Toml,
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> MenuResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(MenuError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a definition and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(MenuDefinition, Vec<DefinitionWarning>)> {
    let format = DefinitionFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, format, path)
}

/// Parse definition `content`; `path` is only used for reporting.
pub fn parse_with_warnings(
    content: &str,
    format: DefinitionFormat,
    path: &Path,
) -> MenuResult<(MenuDefinition, Vec<DefinitionWarning>)> {
    let (definition, unknown_paths) = match format {
        DefinitionFormat::Toml => deserialize_tracking(toml::de::Deserializer::new(content))?,
        DefinitionFormat::Yaml => {
            deserialize_tracking(serde_yaml_ng::Deserializer::from_str(content))?
        }
        DefinitionFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let parsed = deserialize_tracking(&mut deserializer)?;
            deserializer.end()?;
            parsed
        }
    };

    validate(&definition, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            DefinitionWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((definition, warnings))
}

fn deserialize_tracking<'de, D>(deserializer: D) -> Result<(MenuDefinition, Vec<String>), D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut unknown_paths = Vec::new();
    let definition = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;
    Ok((definition, unknown_paths))
}

fn validate(definition: &MenuDefinition, path: &Path) -> MenuResult<()> {
    let invalid = |message: String| MenuError::InvalidDefinition {
        file: path.to_path_buf(),
        message,
    };

    if definition.menu.name.trim().is_empty() {
        return Err(invalid("menu name must not be empty".to_string()));
    }
    for (idx, item) in definition.items.iter().enumerate() {
        if let Some(problem) = item.problem() {
            return Err(invalid(format!("items[{idx}]: {problem}")));
        }
    }
    for (idx, rule) in definition.tags.iter().enumerate() {
        if rule.name.trim().is_empty() {
            return Err(invalid(format!("tags[{idx}]: tag rule requires `name`")));
        }
    }
    Ok(())
}

/// Apply environment variable overrides (NAVMENU_* prefix)
pub fn with_env_overrides(definition: MenuDefinition) -> MenuDefinition {
    apply_overrides(definition, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut definition: MenuDefinition,
    var: impl Fn(&str) -> Option<String>,
) -> MenuDefinition {
    // NAVMENU_ICON_POSITION
    if let Some(position) = var("NAVMENU_ICON_POSITION") {
        definition.menu.icon_position = position.trim().to_lowercase();
    }

    // NAVMENU_ONLY_ICONS
    if let Some(val) = var("NAVMENU_ONLY_ICONS") {
        definition.menu.only_icons = is_truthy(&val);
    }

    // NAVMENU_SUBITEMS
    if let Some(val) = var("NAVMENU_SUBITEMS") {
        definition.menu.subitems = is_truthy(&val);
    }

    definition
}

fn is_truthy(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "menu",
        "name",
        "subitems",
        "only_icons",
        "icon_position",
        "active",
        "items",
        "kind",
        "text",
        "url",
        "html",
        "id",
        "parent",
        "disabled",
        "order",
        "icon",
        "badge",
        "attributes",
        "tags",
        "level",
        "class",
        "boolean",
        "icons",
        "sort",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("parent", "parent"), 0);
        assert_eq!(levenshtein("parnet", "parent"), 2);
        assert_eq!(levenshtein("", "url"), 3);
    }

    #[test]
    fn suggest_key_picks_close_candidate() {
        assert_eq!(suggest_key("zzzzzzzz"), None);
        assert_eq!(suggest_key("ordr"), Some("order".to_string()));
        assert_eq!(suggest_key("icon_positon"), Some("icon_position".to_string()));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a/main.TOML")).unwrap(),
            DefinitionFormat::Toml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("main.yml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert!(matches!(
            DefinitionFormat::from_path(Path::new("main")),
            Err(MenuError::UnsupportedFormat { .. })
        ));
    }
}
