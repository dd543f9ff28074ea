//! Interactive frame browser

use anyhow::Result;
use frames::{outline, report, FrameNetwork};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::table;

const PROMPT: &str = "frames> ";

const HELP: &str = "\
Type a frame name to show its attributes.

Commands:
  :list           List frame names
  :tree           Show the taxonomy tree
  :report <name>  Plain-text report for a frame
  :help           Show this help
  :quit           Exit
";

/// What the prompt should do after a line of input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Print this text and keep prompting
    Print(String),

    /// Leave the browser
    Quit,
}

/// Interpret one line of input.
pub(crate) fn respond(network: &FrameNetwork, line: &str) -> Reply {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "" => Reply::Print(String::new()),
        ":quit" | ":q" | ":exit" => Reply::Quit,
        ":help" | ":h" | "?" => Reply::Print(HELP.to_string()),
        ":list" | ":ls" => Reply::Print(format!("{}\n", network.names().join("\n"))),
        ":tree" => Reply::Print(outline(network).to_string()),
        ":report" => match network.by_name(arg) {
            Some(frame) => Reply::Print(report(network, frame).to_string()),
            None => Reply::Print(unknown(arg)),
        },
        _ if command.starts_with(':') => {
            Reply::Print(format!("Unknown command '{}' (try :help)\n", command))
        }
        _ => match network.by_name(line) {
            Some(frame) => Reply::Print(table::render(network, frame)),
            None => Reply::Print(unknown(line)),
        },
    }
}

fn unknown(name: &str) -> String {
    format!("No frame named '{}' (try :list)\n", name)
}

/// Run the prompt until `:quit`, Ctrl-C or Ctrl-D.
pub fn run(network: &FrameNetwork) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!(
        "{} frames loaded. Type a frame name, or :help for commands.",
        network.len()
    );

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                match respond(network, &line) {
                    Reply::Print(text) => print!("{}", text),
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    debug!("browser closed");
    Ok(())
}
