//! The variable environment a header is rendered against.
//!
//! Three groups of variables are layered, later groups overriding earlier
//! ones with the same name:
//!
//! 1. built-ins: `author`, `authorEmail`, `company`, `description`,
//!    `createdDate`, `lastModifiedDate`, `headerBegin`, `headerPrefix`,
//!    `headerEnd`
//! 2. the merged user `variables`
//! 3. predefined path and date variables: `workspaceFolder`,
//!    `workspaceFolderBasename`, `file`, `relativeFile`, `fileBasename`,
//!    `fileBasenameNoExtension`, `fileDirname`, `fileExtname`,
//!    `pathSeparator`, `date`, `year`
//!
//! User variables can therefore replace `description` or `company`, but not
//! the path variables.

use chrono::{DateTime, Datelike, Local};
use std::path::{Path, PathBuf};
use tera::Context;
use tracing::trace;

use super::format_datetime;
use crate::config::{EffectiveSettings, VariableEntry, merge_layers};
use crate::constants::{DEFAULT_COMPANY, DEFAULT_DESCRIPTION, PROJECT_ROOT_MARKERS};
use crate::language::ResolvedTemplate;

/// Ordered name/value pairs with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableEnvironment {
    entries: Vec<VariableEntry>,
}

impl VariableEnvironment {
    /// Build an environment from layered entry lists, later lists winning.
    #[must_use]
    pub fn layered(layers: &[&[VariableEntry]]) -> Self {
        Self {
            entries: merge_layers(layers),
        }
    }

    /// Value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.name() == name).map(VariableEntry::value)
    }

    /// Whether `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All entries in order.
    #[must_use]
    pub fn entries(&self) -> &[VariableEntry] {
        &self.entries
    }

    /// Variable names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(VariableEntry::name)
    }

    /// Convert into a template context.
    #[must_use]
    pub fn to_context(&self) -> Context {
        let mut context = Context::new();
        for entry in &self.entries {
            context.insert(entry.name(), entry.value());
        }
        context
    }
}

/// Paths describing where a document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Absolute path of the document
    pub file: PathBuf,
    /// Project folder the document belongs to
    pub workspace_folder: PathBuf,
    /// Display name of the workspace
    pub workspace_name: String,
}

fn base_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

impl DocumentPaths {
    /// Locate the project folder of `file`.
    ///
    /// The project folder is the nearest ancestor holding one of
    /// [`PROJECT_ROOT_MARKERS`]; without one, the workspace root, and failing
    /// that the file's own directory.
    #[must_use]
    pub fn discover(file: &Path, workspace_root: Option<&Path>) -> Self {
        let directory = file.parent().map(Path::to_path_buf).unwrap_or_default();

        let project = directory
            .ancestors()
            .find(|dir| PROJECT_ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
            .map(Path::to_path_buf);

        let workspace_folder = project
            .or_else(|| workspace_root.map(Path::to_path_buf))
            .unwrap_or(directory);

        let workspace_name = base_name(workspace_root.unwrap_or(&workspace_folder));
        trace!("Project folder of {} is {}", file.display(), workspace_folder.display());

        Self {
            file: file.to_path_buf(),
            workspace_folder,
            workspace_name,
        }
    }

    /// `file` relative to the project folder, or the full path when outside it.
    #[must_use]
    pub fn relative_file(&self) -> String {
        self.file
            .strip_prefix(&self.workspace_folder)
            .unwrap_or(&self.file)
            .to_string_lossy()
            .into_owned()
    }
}

/// Per-operation facts that are not part of the settings.
#[derive(Debug, Clone)]
pub struct RenderFacts {
    /// Resolved author; `None` renders as empty text
    pub author: Option<String>,
    /// Creation time of the file
    pub created: DateTime<Local>,
    /// Time of the operation
    pub now: DateTime<Local>,
}

/// Build the variable environment for one render.
#[must_use]
pub fn build_environment(
    template: &ResolvedTemplate,
    settings: &EffectiveSettings,
    facts: &RenderFacts,
    paths: &DocumentPaths,
) -> VariableEnvironment {
    let config = &settings.config;
    let dateformat = config.dateformat();

    let builtins = vec![
        VariableEntry::new("author", facts.author.clone().unwrap_or_default()),
        VariableEntry::new("authorEmail", config.author_email.clone().unwrap_or_default()),
        VariableEntry::new(
            "company",
            config.company.clone().unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
        ),
        VariableEntry::new("description", DEFAULT_DESCRIPTION),
        VariableEntry::new("createdDate", format_datetime(&facts.created, dateformat)),
        VariableEntry::new("lastModifiedDate", format_datetime(&facts.now, dateformat)),
        VariableEntry::new("headerBegin", template.header_begin.clone()),
        VariableEntry::new("headerPrefix", template.header_prefix.clone()),
        VariableEntry::new("headerEnd", template.header_end.clone()),
    ];

    let file = &paths.file;
    let predefined = vec![
        VariableEntry::new("workspaceFolder", paths.workspace_folder.to_string_lossy()),
        VariableEntry::new("workspaceFolderBasename", paths.workspace_name.clone()),
        VariableEntry::new("file", file.to_string_lossy()),
        VariableEntry::new("relativeFile", paths.relative_file()),
        VariableEntry::new("fileBasename", base_name(file)),
        VariableEntry::new(
            "fileBasenameNoExtension",
            file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default(),
        ),
        VariableEntry::new(
            "fileDirname",
            file.parent().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default(),
        ),
        VariableEntry::new(
            "fileExtname",
            file.extension().map(|e| format!(".{}", e.to_string_lossy())).unwrap_or_default(),
        ),
        VariableEntry::new("pathSeparator", std::path::MAIN_SEPARATOR_STR),
        VariableEntry::new("date", format_datetime(&facts.now, dateformat)),
        VariableEntry::new("year", facts.now.year().to_string()),
    ];

    VariableEnvironment::layered(&[
        builtins.as_slice(),
        settings.variables.as_slice(),
        predefined.as_slice(),
    ])
}
