use std::fs;
use std::io::Write;

use anyhow::Context;
use wordbook_config::Project;
use wordbook_render::EntryTemplate;

use super::load_vocabulary;

/// Render every entry of the project into a single Markdown file
pub fn handle_render(
    project: &Project,
    template: &EntryTemplate,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(project)?;
    let entries = wordbook_render::render_all(template, &vocabulary.words)?;

    let path = project.entries_file();
    fs::create_dir_all(&project.output_dir)
        .with_context(|| format!("failed to create {}", project.output_dir.display()))?;
    fs::write(&path, entries).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Rendered {} entries to {}", vocabulary.len(), path.display());

    writeln!(out, "已生成: {}", path.display())?;
    Ok(())
}
