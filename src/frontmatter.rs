//! SKILL.md frontmatter parsing
//!
//! A skill directory describes itself with a `SKILL.md` file whose YAML
//! frontmatter carries at least `name` and `description`.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

/// File that marks a directory as a skill
pub const SKILL_FILE: &str = "SKILL.md";

/// Parse content into optional YAML frontmatter (between first `---` and second `---`)
/// and body. Returns `None` if no valid frontmatter (missing delimiters or not a mapping).
pub fn parse_frontmatter_and_body(content: &str) -> Option<(Value, String)> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let frontmatter_str = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    let value: Value = serde_yaml::from_str(&frontmatter_str).ok()?;
    if value.as_mapping().is_none() && !value.is_null() {
        return None;
    }
    Some((value, body))
}

/// Get a scalar value from a frontmatter mapping by top-level key
pub fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    match mapping.get(Value::String(key.to_string()))? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Name and description declared by a skill's SKILL.md
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SkillMetadata {
    /// Read `SKILL.md` under `dir`.
    ///
    /// Returns `None` when the file is absent or unreadable; metadata is
    /// informational and never blocks an install.
    pub fn read(dir: &Path) -> Option<Self> {
        let path = dir.join(SKILL_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "no readable SKILL.md");
                return None;
            }
        };
        Some(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        match parse_frontmatter_and_body(content) {
            Some((fm, _)) => Self {
                name: get_str(&fm, "name").filter(|s| !s.is_empty()),
                description: get_str(&fm, "description").filter(|s| !s.is_empty()),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn parse_no_frontmatter() {
        let content = "just body\nno delimiters";
        assert!(parse_frontmatter_and_body(content).is_none());
    }

    #[test]
    fn test_parse_frontmatter_and_body() {
        let content = "---\ndescription: hello\n---\n\nbody here";
        let (fm, body) =
            parse_frontmatter_and_body(content).expect("Should parse frontmatter and body");
        assert_eq!(get_str(&fm, "description").as_deref(), Some("hello"));
        assert_eq!(body.trim(), "body here");
    }

    #[test]
    fn parse_unterminated_frontmatter() {
        assert!(parse_frontmatter_and_body("---\nname: x\nbody").is_none());
    }

    #[test]
    fn parse_scalar_frontmatter_rejected() {
        assert!(parse_frontmatter_and_body("---\njust a string\n---\n").is_none());
    }

    #[test]
    fn get_str_scalars() {
        let (fm, _) = parse_frontmatter_and_body("---\nversion: 2\nbeta: true\nlist: [a]\n---\n")
            .unwrap();
        assert_eq!(get_str(&fm, "version").as_deref(), Some("2"));
        assert_eq!(get_str(&fm, "beta").as_deref(), Some("true"));
        assert_eq!(get_str(&fm, "list"), None);
        assert_eq!(get_str(&fm, "missing"), None);
    }

    #[test]
    fn metadata_from_skill_file() {
        let temp = create_temp_dir();
        fs::write(
            temp.path().join(SKILL_FILE),
            "---\nname: pdf\ndescription: Work with PDF files\n---\n# PDF\n",
        )
        .unwrap();
        let meta = SkillMetadata::read(temp.path()).unwrap();
        assert_eq!(meta.name.as_deref(), Some("pdf"));
        assert_eq!(meta.description.as_deref(), Some("Work with PDF files"));
    }

    #[test]
    fn metadata_missing_file() {
        let temp = create_temp_dir();
        assert!(SkillMetadata::read(temp.path()).is_none());
    }

    #[test]
    fn metadata_without_frontmatter_is_empty() {
        assert_eq!(SkillMetadata::parse("# Title only"), SkillMetadata::default());
    }
}
