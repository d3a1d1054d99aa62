use std::io::Write;

use anyhow::Context;
use wordbook_config::Workspace;

pub fn handle_list(workspace: &Workspace, out: &mut impl Write) -> anyhow::Result<()> {
    let projects = workspace
        .list_projects()
        .with_context(|| format!("failed to read {}", workspace.projects_dir.display()))?;
    tracing::debug!("Found {} projects", projects.len());

    if projects.is_empty() {
        writeln!(out, "暂无项目")?;
        return Ok(());
    }

    writeln!(out, "可用项目:")?;
    for name in &projects {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}
