use std::fs;
use std::io::Write;

use anyhow::Context;
use wordbook_config::Project;
use wordbook_core::ExportFormat;

use super::load_vocabulary;

pub fn handle_export(
    project: &Project,
    format: ExportFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(project)?;
    let content = wordbook_core::export(&vocabulary.words, format)?;

    let path = project.word_list_file(format.extension());
    fs::create_dir_all(&project.output_dir)
        .with_context(|| format!("failed to create {}", project.output_dir.display()))?;
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Exported {} words to {}", vocabulary.len(), path.display());

    writeln!(out, "已导出到: {}", path.display())?;
    Ok(())
}
