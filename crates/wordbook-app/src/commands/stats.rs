use std::io::Write;

use wordbook_config::Project;

use super::load_vocabulary;

pub fn handle_stats(project: &Project, out: &mut impl Write) -> anyhow::Result<()> {
    let vocabulary = load_vocabulary(project)?;
    let stats = wordbook_core::aggregate(&vocabulary.words).with_project(&project.name);

    writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    Ok(())
}
