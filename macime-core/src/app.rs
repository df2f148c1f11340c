//! Command dispatch: one command per process, output written to a sink

use crate::error::Result;
use crate::output::{render_source, render_sources, OutputFormat, View};
use crate::provider::InputSourceProvider;
use crate::session::SessionStore;
use crate::workflow::{Persist, Selector};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the active input source
    Get { view: View, format: OutputFormat },
    /// Print enabled input sources
    List {
        view: View,
        format: OutputFormat,
        select_capable: bool,
    },
    /// Switch input source, optionally saving the previous one
    Set {
        id: String,
        save: bool,
        session_id: Option<String>,
    },
    /// Restore the input source saved for a session
    Load { session_id: Option<String> },
    /// Cycle through a list of input sources
    Toggle {
        ids: Vec<String>,
        save: bool,
        session_id: Option<String>,
        format: OutputFormat,
    },
}

impl Command {
    pub fn format(&self) -> OutputFormat {
        match self {
            Command::Get { format, .. }
            | Command::List { format, .. }
            | Command::Toggle { format, .. } => *format,
            Command::Set { .. } | Command::Load { .. } => OutputFormat::Text,
        }
    }
}

pub fn run<W: Write>(
    command: &Command,
    provider: &dyn InputSourceProvider,
    store: &dyn SessionStore,
    out: &mut W,
) -> Result<()> {
    let selector = Selector::new(provider, store);

    match command {
        Command::Get { view, format } => {
            let current = selector.get()?;
            emit(out, &render_source(&current, *view, *format)?)?;
        }
        Command::List {
            view,
            format,
            select_capable,
        } => {
            let sources = selector.list(*select_capable)?;
            emit(out, &render_sources(&sources, *view, *format)?)?;
        }
        Command::Set {
            id,
            save,
            session_id,
        } => {
            selector.set(id, Persist::from_flags(*save, session_id.as_deref()))?;
        }
        Command::Load { session_id } => {
            selector.load(session_id.as_deref())?;
        }
        Command::Toggle {
            ids,
            save,
            session_id,
            format,
        } => {
            let outcome = selector.toggle(ids, Persist::from_flags(*save, session_id.as_deref()))?;
            emit(out, &render_source(&outcome.selected, View::Id, *format)?)?;
        }
    }

    Ok(())
}

/// Write `text` followed by a newline; empty output prints nothing
fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
