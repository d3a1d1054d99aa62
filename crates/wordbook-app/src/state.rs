use wordbook_config::Workspace;
use wordbook_render::EntryTemplate;

/// Everything a command needs, resolved once at startup
pub struct AppState {
    pub workspace: Workspace,
    pub template: EntryTemplate,
}

impl AppState {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            template: EntryTemplate::default_chinese(),
        }
    }
}
