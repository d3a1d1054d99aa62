use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::project::{Project, ProjectError};

pub mod project;

/// Name of the vocabulary document inside a project's data directory
pub const VOCABULARY_FILE: &str = "vocabulary.json";

/// Directory layout of a book workspace.
///
/// ```text
/// <root>/
///   projects/<name>/data/vocabulary/vocabulary.json
///   projects/<name>/content/
///   shared/templates/
///   output/<name>/
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub root: PathBuf,
    pub projects_dir: PathBuf,
    pub shared_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();

        Workspace {
            projects_dir: root.join("projects"),
            shared_dir: root.join("shared"),
            output_dir: root.join("output"),
            root,
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.shared_dir.join("templates")
    }

    /// Names of all projects, sorted. A missing projects directory means none.
    pub fn list_projects(&self) -> std::io::Result<Vec<String>> {
        if !self.projects_dir.exists() {
            tracing::debug!("No projects directory at {}", self.projects_dir.display());
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.projects_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    /// Resolve a project by name; it must already exist on disk.
    ///
    /// The name must be a single directory name under `projects/`.
    pub fn project(&self, name: &str) -> Result<Project, ProjectError> {
        if !is_project_name(name) {
            return Err(ProjectError::UnknownProject(name.to_string()));
        }
        let project = Project::new(self, name);
        if !project.root.is_dir() {
            return Err(ProjectError::UnknownProject(name.to_string()));
        }
        tracing::debug!("Using project {} at {}", name, project.root.display());
        Ok(project)
    }

    /// Like [`Workspace::project`], but for commands that need `--project`
    pub fn require_project(
        &self,
        command: &str,
        name: Option<&str>,
    ) -> Result<Project, ProjectError> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.project(name),
            None => Err(ProjectError::MissingProject {
                command: command.to_string(),
            }),
        }
    }
}

fn is_project_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let ws = Workspace::new("/books");
        assert_eq!(ws.projects_dir, PathBuf::from("/books/projects"));
        assert_eq!(ws.output_dir, PathBuf::from("/books/output"));
        assert_eq!(ws.templates_dir(), PathBuf::from("/books/shared/templates"));
    }

    #[test]
    fn test_list_projects() {
        let temp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        assert!(ws.list_projects().unwrap().is_empty());

        fs::create_dir_all(ws.projects_dir.join("vocab-b")).unwrap();
        fs::create_dir_all(ws.projects_dir.join("vocab-a")).unwrap();
        fs::write(ws.projects_dir.join("README.md"), "not a project").unwrap();

        assert_eq!(ws.list_projects().unwrap(), vec!["vocab-a", "vocab-b"]);
    }

    #[test]
    fn test_unknown_project() {
        let temp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(temp.path());

        let err = ws.project("missing").unwrap_err();
        assert!(matches!(err, ProjectError::UnknownProject(name) if name == "missing"));
    }

    #[test]
    fn test_require_project() {
        let temp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(temp.path());
        fs::create_dir_all(ws.projects_dir.join("vocab-book")).unwrap();

        let err = ws.require_project("stats", None).unwrap_err();
        assert!(matches!(err, ProjectError::MissingProject { command } if command == "stats"));

        let err = ws.require_project("stats", Some("")).unwrap_err();
        assert!(matches!(err, ProjectError::MissingProject { command } if command == "stats"));

        let project = ws.require_project("stats", Some("vocab-book")).unwrap();
        assert_eq!(project.name, "vocab-book");
    }

    #[test]
    fn test_project_name_must_stay_inside_projects_dir() {
        let temp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(temp.path().join("books"));
        fs::create_dir_all(ws.projects_dir.join("vocab-book")).unwrap();
        fs::create_dir_all(temp.path().join("elsewhere")).unwrap();

        let absolute = temp.path().join("elsewhere");
        let outside = [
            absolute.to_str().unwrap(),
            "..",
            "../projects",
            "vocab-book/..",
            "vocab-book/data",
            ".",
        ];
        for name in outside {
            let err = ws.project(name).unwrap_err();
            assert!(
                matches!(&err, ProjectError::UnknownProject(n) if n == name),
                "{name} was accepted"
            );
        }

        assert!(ws.project("vocab-book").is_ok());
    }
}
