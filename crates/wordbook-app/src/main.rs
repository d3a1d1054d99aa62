use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordbook_config::Workspace;
use wordbook_core::ExportFormat;

pub mod commands;
pub mod state;


use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordbook")]
#[command(about = "书籍构建工具")]
pub struct Cli {
    /// Command to run
    #[arg(value_enum)]
    pub command: Option<Command>,

    /// Project name
    #[arg(long, short)]
    pub project: Option<String>,

    /// Export format
    #[arg(long, short, value_enum, default_value_t = Format::Txt)]
    pub format: Format,

    /// Workspace root containing projects/, shared/ and output/
    #[arg(long, short, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// List all projects
    List,
    /// Show vocabulary statistics
    Stats,
    /// Check data completeness
    Validate,
    /// Export the word list
    Export,
    /// Render study entries as Markdown
    Render,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Txt,
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Txt => ExportFormat::Txt,
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Stats => "stats",
            Command::Validate => "validate",
            Command::Export => "export",
            Command::Render => "render",
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    let Some(command) = cli.command else {
        return match print_usage(&mut out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    let state = AppState::new(Workspace::new(&cli.root));
    tracing::debug!("Running {} in {}", command.name(), state.workspace.root.display());

    match commands::run(&state, command, &cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{} failed: {e:#}", command.name());
            report_error(&mut out, &e);
            ExitCode::FAILURE
        }
    }
}

/// Print a fatal error for the user; if stdout is gone, fall back to stderr
pub(crate) fn report_error(out: &mut impl Write, error: &anyhow::Error) {
    if let Err(write_err) = writeln!(out, "错误: {error:#}") {
        tracing::error!("failed to write error to stdout: {write_err}");
        eprintln!("错误: {error:#}");
    }
}

fn print_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "用法: wordbook <command> [options]")?;
    writeln!(out, "\n命令:")?;
    writeln!(out, "  list      - 列出所有项目")?;
    writeln!(out, "  stats     - 显示词汇统计 (需要 --project)")?;
    writeln!(out, "  validate  - 验证数据完整性 (需要 --project)")?;
    writeln!(out, "  export    - 导出单词列表 (需要 --project)")?;
    writeln!(out, "  render    - 生成单词条目 (需要 --project)")?;
    writeln!(out, "\n选项:")?;
    writeln!(out, "  --project, -p  项目名称")?;
    writeln!(out, "  --format, -f   导出格式 (txt/csv/json)")?;
    writeln!(out, "  --root, -r     工作区目录 (默认: 当前目录)")?;
    writeln!(out, "\n示例:")?;
    writeln!(out, "  wordbook list")?;
    writeln!(out, "  wordbook stats --project vocab-book")?;
    writeln!(out, "  wordbook export --project vocab-book --format csv")?;
    Ok(())
}
