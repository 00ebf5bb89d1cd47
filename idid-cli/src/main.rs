mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use idid_core::Journal;
use render::{ColorMode, Renderer};
use std::io::{self, IsTerminal};
use std::{
    fs,
    process::{Command, ExitCode},
};
use uuid::Uuid;

/// idid — daily notes, a one-line summary and a small decision helper
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a note to today's log (opens your editor when no text is given)
    Log { text: Vec<String> },
    /// Show today's log entries, newest first
    List,
    /// Delete one of today's entries by id
    Delete { id: Uuid },
    /// Clear today's log and its cached summary
    Clear,
    /// Show today's summary (cached, rebuilt when missing)
    Summary {
        /// Rebuild even when a cached summary exists
        #[arg(long)]
        rebuild: bool,
    },
    /// Ask the decision helper a question and record the outcome
    Decide {
        question: Vec<String>,
        /// Do not append the outcome to the decision history
        #[arg(long)]
        no_save: bool,
    },
    /// Show the recorded decision history
    History,
    /// Print the storage root directory
    Path,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("idid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // The handle flushes and keeps the logger alive until the process exits.
    let _logger = init_logging();
    let cli = Cli::parse();
    let mut journal = Journal::new()?;
    let renderer = Renderer::new(use_color(&cli));

    match cli.command {
        Commands::Log { text } => log_entry(&mut journal, &renderer, text),
        Commands::List => list_today(&journal, &renderer),
        Commands::Delete { id } => {
            if journal.delete_log(id)? {
                renderer.print_info("Entry deleted.");
            } else {
                renderer.print_info("No entry with that id today.");
            }
            Ok(())
        }
        Commands::Clear => {
            journal.clear_today()?;
            renderer.print_info("Cleared today's log and summary.");
            Ok(())
        }
        Commands::Summary { rebuild } => {
            let summary = if rebuild {
                journal.rebuild_summary()?
            } else {
                journal.summary()?
            };
            renderer.print_summary(&summary);
            Ok(())
        }
        Commands::Decide { question, no_save } => decide(&mut journal, &renderer, question, no_save),
        Commands::History => {
            let history = journal.decisions()?;
            if history.is_empty() {
                renderer.print_info("No decisions recorded yet.");
                return Ok(());
            }
            for decision in &history {
                renderer.print_decision_line(decision);
            }
            Ok(())
        }
        Commands::Path => {
            println!("{}", journal.config.data_dir.display());
            Ok(())
        }
    }
}

fn log_entry(journal: &mut Journal, renderer: &Renderer, text: Vec<String>) -> Result<()> {
    let input = if text.is_empty() {
        let editor = resolve_editor(journal);
        create_editor_buffer(&editor)?
    } else {
        text.join(" ")
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(());
    }

    let entry = journal.append_log(trimmed)?;
    renderer.print_info(&format!(
        "Added entry at {}.",
        entry.time.format("%H:%M")
    ));
    Ok(())
}

fn list_today(journal: &Journal, renderer: &Renderer) -> Result<()> {
    let logs = journal.today_logs()?;
    if logs.is_empty() {
        renderer.print_info(&format!("No entries for {} yet.", journal.today()));
        return Ok(());
    }
    renderer.print_info(&format!("{} entries for {}.", logs.len(), journal.today()));
    for entry in logs.iter().rev() {
        renderer.print_log_line(entry);
    }
    Ok(())
}

fn decide(
    journal: &mut Journal,
    renderer: &Renderer,
    question: Vec<String>,
    no_save: bool,
) -> Result<()> {
    let question = question.join(" ");
    let question = question.trim();
    if question.is_empty() {
        renderer.print_info("Nothing to decide, because no question was received.");
        return Ok(());
    }

    let advice = journal.decide(question);
    renderer.print_advice(&advice);
    if !no_save {
        journal.record_decision(question, advice)?;
    }
    Ok(())
}

fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    // Best effort; a broken logger setup must never block the CLI.
    flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}

fn use_color(cli: &Cli) -> bool {
    match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    }
}

fn resolve_editor(journal: &Journal) -> String {
    journal
        .config
        .editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("idid")
        .suffix(".txt")
        .tempfile()?;

    let path = file.path().to_path_buf();
    let status = Command::new(editor_cmd).arg(&path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(fs::read_to_string(&path)?)
}
