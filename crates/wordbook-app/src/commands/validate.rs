use std::io::Write;

use wordbook_config::Project;

use super::load_vocabulary;

pub fn handle_validate(project: &Project, out: &mut impl Write) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(project)?;
    let diagnostics = wordbook_core::validate(&vocabulary.words);

    if diagnostics.is_empty() {
        writeln!(out, "数据验证通过！")?;
        return Ok(());
    }

    tracing::info!("{} validation problems in {}", diagnostics.len(), project.name);
    writeln!(out, "发现以下问题:")?;
    for diagnostic in &diagnostics {
        writeln!(out, "  - {diagnostic}")?;
    }
    Ok(())
}
