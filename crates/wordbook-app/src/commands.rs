use std::io::Write;

use anyhow::Context;
use wordbook_config::Project;
use wordbook_core::Vocabulary;

use crate::state::AppState;
use crate::{Cli, Command};

pub mod export;
pub mod list;
pub mod render;
pub mod stats;
pub mod validate;

use export::handle_export;
use list::handle_list;
use render::handle_render;
use stats::handle_stats;
use validate::handle_validate;

/// Dispatch a command.
///
/// A missing or unknown project is reported to `out` and the command is
/// skipped; only failures while doing the actual work are returned as errors.
pub fn run(
    state: &AppState,
    command: Command,
    cli: &Cli,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if command == Command::List {
        return handle_list(&state.workspace, out);
    }

    let project = match state
        .workspace
        .require_project(command.name(), cli.project.as_deref())
    {
        Ok(project) => project,
        Err(e) => {
            tracing::warn!("{e}");
            writeln!(out, "错误: {e}")?;
            return Ok(());
        }
    };

    match command {
        Command::Stats => handle_stats(&project, out),
        Command::Validate => handle_validate(&project, out),
        Command::Export => handle_export(&project, cli.format.into(), out),
        Command::Render => handle_render(&project, &state.template, out),
        Command::List => handle_list(&state.workspace, out),
    }
}

fn load_vocabulary(project: &Project) -> anyhow::Result<Vocabulary> {
    let path = project.vocabulary_file();
    wordbook_core::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))
}
