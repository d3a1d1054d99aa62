use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{VOCABULARY_FILE, Workspace};

/// Paths of a single book project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub content_dir: PathBuf,
    /// Shared across all projects of the workspace
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Project {
    pub fn new(workspace: &Workspace, name: &str) -> Self {
        let root = workspace.projects_dir.join(name);

        Self {
            name: name.to_string(),
            data_dir: root.join("data"),
            content_dir: root.join("content"),
            templates_dir: workspace.templates_dir(),
            output_dir: workspace.output_dir.join(name),
            root,
        }
    }

    pub fn vocabulary_file(&self) -> PathBuf {
        self.data_dir.join("vocabulary").join(VOCABULARY_FILE)
    }

    /// Where an export in the given format is written
    pub fn word_list_file(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("word_list.{extension}"))
    }

    pub fn entries_file(&self) -> PathBuf {
        self.output_dir.join("entries.md")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("命令 '{command}' 需要指定 --project 参数")]
    MissingProject { command: String },

    #[error("项目 '{0}' 不存在")]
    UnknownProject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        let ws = Workspace::new("/books");
        let project = Project::new(&ws, "vocab-book");

        assert_eq!(
            project.vocabulary_file(),
            PathBuf::from("/books/projects/vocab-book/data/vocabulary/vocabulary.json")
        );
        assert_eq!(
            project.word_list_file("csv"),
            PathBuf::from("/books/output/vocab-book/word_list.csv")
        );
        assert_eq!(
            project.content_dir,
            PathBuf::from("/books/projects/vocab-book/content")
        );
        assert_eq!(project.templates_dir, PathBuf::from("/books/shared/templates"));
    }
}
