use clap::{ArgAction, Args, Parser, Subcommand};
use macime_core::{validate_session_key, Command, OutputFormat, View};

const AFTER_HELP: &str = "\
Environment:
  MACIME_TEMP_DIR    Directory for session files [default: /tmp/riodelphino.macime]
  MACIME_STORE       Session store backend: file | plist [default: file]
  MACIME_PREFS_FILE  Property list used by the plist backend
  MACIME_LOG         Log filter, e.g. debug [default: warn]";

#[derive(Parser, Debug)]
#[command(
    name = "macime",
    author,
    version,
    about = "Fast macOS IME switcher",
    long_about = None,
    after_help = AFTER_HELP,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the current input source
    Get(ViewArgs),

    /// Switch to an input source
    Set {
        /// Input source id, e.g. com.apple.keylayout.ABC
        id: String,

        #[command(flatten)]
        session: SaveArgs,
    },

    /// Restore the input source saved by `set --save`
    Load {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// List enabled input sources
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Show only input sources that can be selected
        #[arg(long)]
        select_capable: bool,
    },

    /// Switch to the next input source in a comma separated list
    Toggle {
        /// Input source ids to cycle through
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        ids: Vec<String>,

        #[command(flatten)]
        session: SaveArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Show every attribute of the input source
    #[arg(long)]
    pub detail: bool,

    /// Show the localized name instead of the id
    #[arg(long, conflicts_with = "detail")]
    pub name: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Name of the save slot
    #[arg(long = "session-id", value_name = "SESSION_ID", value_parser = parse_session_id)]
    pub session_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Save the current input source before switching
    #[arg(long)]
    pub save: bool,

    #[command(flatten)]
    pub session: SessionArgs,
}

impl ViewArgs {
    fn view(&self) -> View {
        if self.detail {
            View::Detail
        } else if self.name {
            View::Name
        } else {
            View::Id
        }
    }

    fn format(&self) -> OutputFormat {
        format_for(self.json)
    }
}

impl Cli {
    pub fn into_command(self) -> Command {
        match self.command {
            Cmd::Get(view) => Command::Get {
                view: view.view(),
                format: view.format(),
            },
            Cmd::Set { id, session } => Command::Set {
                id,
                save: session.save,
                session_id: session.session.session_id,
            },
            Cmd::Load { session } => Command::Load {
                session_id: session.session_id,
            },
            Cmd::List {
                view,
                select_capable,
            } => Command::List {
                view: view.view(),
                format: view.format(),
                select_capable,
            },
            Cmd::Toggle { ids, session, json } => Command::Toggle {
                ids: ids.into_iter().filter(|id| !id.is_empty()).collect(),
                save: session.save,
                session_id: session.session.session_id,
                format: format_for(json),
            },
        }
    }
}

fn format_for(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn parse_session_id(value: &str) -> Result<String, String> {
    validate_session_key(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}
