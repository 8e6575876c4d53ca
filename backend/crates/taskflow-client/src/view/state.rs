//! View state for the form+list UI.
//!
//! The whole UI state lives in one immutable value. Every user action or
//! network result is a transition method that consumes the current state
//! and returns the successor, so the view/edit/cancel flow is testable
//! without a terminal attached.
//!
//! `projects` is a client-side cache of the last confirmed server state.
//! Mutations land in the cache only after the server confirms them; a
//! failed action changes nothing but `notice`.

use crate::models::Project;

/// What the form submits as
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Default: the form creates new projects
    #[default]
    Viewing,
    /// A listed project is selected for in-place edit
    Editing { id: String },
}

/// The create/edit form fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

impl ProjectForm {
    fn prefilled(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Cache of the last successful fetch/mutation responses
    pub projects: Vec<Project>,
    pub form: ProjectForm,
    pub mode: Mode,
    /// True from load start until the fetch resolves, ok or failed
    pub loading: bool,
    /// Last user-visible failure, if any
    pub notice: Option<String>,
}

impl ViewState {
    /// Initial state: viewing, empty form, list fetch in flight.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// A list fetch went out.
    pub fn load_started(mut self) -> Self {
        self.loading = true;
        self
    }

    /// The list fetch resolved; mirror server state into the cache.
    pub fn list_loaded(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self.loading = false;
        self.notice = None;
        self
    }

    /// The list fetch failed; keep whatever was cached.
    pub fn load_failed(mut self, message: impl Into<String>) -> Self {
        self.loading = false;
        self.notice = Some(message.into());
        self
    }

    /// The server confirmed a create: prepend and clear the form.
    pub fn created(mut self, project: Project) -> Self {
        self.projects.insert(0, project);
        self.form = ProjectForm::default();
        self.notice = None;
        self
    }

    /// Select a listed project for editing; the form is pre-filled with
    /// its current name and description. Unknown ids are a no-op.
    pub fn edit_requested(mut self, id: &str) -> Self {
        if let Some(project) = self.projects.iter().find(|p| p.id == id) {
            self.form = ProjectForm::prefilled(project);
            self.mode = Mode::Editing { id: id.to_string() };
        }
        self
    }

    /// Leave edit mode, discarding any edits.
    pub fn edit_cancelled(mut self) -> Self {
        self.mode = Mode::Viewing;
        self.form = ProjectForm::default();
        self
    }

    /// The server confirmed an update: replace the matching cached
    /// record and return to viewing.
    pub fn updated(mut self, project: Project) -> Self {
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
        self.mode = Mode::Viewing;
        self.form = ProjectForm::default();
        self.notice = None;
        self
    }

    /// The server confirmed a delete: drop the cached record.
    pub fn deleted(mut self, id: &str) -> Self {
        self.projects.retain(|p| p.id != id);
        self.notice = None;
        self
    }

    /// A create/update/delete failed. The cache is left untouched; the
    /// message surfaces to the user.
    pub fn action_failed(mut self, message: impl Into<String>) -> Self {
        self.notice = Some(message.into());
        self
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { id } => Some(id),
            Mode::Viewing => None,
        }
    }
}
