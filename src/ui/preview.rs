//! Summary of the selected skill shown before target selection

use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use super::{Prompter, SkillSelection};
use crate::frontmatter::SkillMetadata;
use crate::source::GithubLocation;

#[derive(Debug, Clone)]
pub struct SkillPreview {
    pub skill_name: String,
    pub coordinate: String,
    pub source: PathBuf,
    pub file_count: usize,
    pub metadata: Option<SkillMetadata>,
}

impl SkillPreview {
    pub fn collect(selection: &SkillSelection, location: &GithubLocation) -> Self {
        Self {
            skill_name: selection.skill_name.clone(),
            coordinate: location.to_string(),
            source: selection.path.clone(),
            file_count: count_files(&selection.path),
            metadata: SkillMetadata::read(&selection.path),
        }
    }

    pub fn render(&self, prompter: &mut dyn Prompter) {
        let bold = Style::new().bold();
        let dim = Style::new().dim();

        prompter.say("");
        prompter.say(&format!("{} {}", bold.apply_to("Skill:"), self.skill_name));
        prompter.say(&format!("  {} {}", dim.apply_to("from"), self.coordinate));
        prompter.say(&format!("  {} {}", dim.apply_to("files"), self.file_count));

        match &self.metadata {
            Some(meta) => {
                if let Some(name) = meta.name.as_deref().filter(|n| *n != self.skill_name) {
                    prompter.say(&format!("  {} {name}", dim.apply_to("declared name")));
                }
                if let Some(desc) = &meta.description {
                    prompter.say(&format!("  {} {desc}", dim.apply_to("description")));
                }
            }
            None => prompter.warn("No SKILL.md found in the selected directory"),
        }
    }
}

/// Regular files below `dir`, ignoring any `.git` directory
fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
