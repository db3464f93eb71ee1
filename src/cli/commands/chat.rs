//! Chat command - interactive session over stdin
//!
//! Reads one message per line. Lines starting with `:` are session
//! commands: `:reload`, `:history`, `:clear`, `:quit`.

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::chat::ChatSession;
use crate::core::services::Services;
use crate::core::types::{ChatReply, ChatRole};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Arguments for the chat command
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Show score and matched question under each reply
    #[arg(long)]
    pub show_meta: bool,

    /// Do not print the prompt marker
    #[arg(long)]
    pub quiet: bool,
}

/// Execute the chat command on the process's stdin/stdout
pub async fn execute(
    args: ChatArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with_io(args, services, format, stdin.lock(), stdout.lock())
}

/// Run a chat session over arbitrary reader/writer
///
/// In JSON mode every reply is written as one JSON line.
pub fn execute_with_io<R: BufRead, W: Write>(
    args: ChatArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    reader: R,
    mut writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = services.new_session();
    let interactive = format == OutputFormat::Human && !args.quiet;

    if interactive {
        writeln!(
            writer,
            "{} {}",
            colors::label("MediBot"),
            colors::dim("(type :quit to exit, :history to review)")
        )?;
        write_prompt(&mut writer)?;
    }

    for line in reader.lines() {
        let line = line?;
        let message = line.trim();

        match message {
            "" => {}
            ":quit" | ":exit" => break,
            ":reload" => {
                let stats = services.engine.reload();
                match format {
                    OutputFormat::Human => writeln!(
                        writer,
                        "{} {} entries in {}",
                        colors::success("Reloaded"),
                        colors::number(&stats.entries.to_string()),
                        output::format_millis_colored(stats.duration_ms)
                    )?,
                    OutputFormat::Json => {
                        writeln!(writer, "{}", serde_json::to_string(&stats)?)?
                    }
                }
            }
            ":history" => write_history(&mut writer, &session, format)?,
            ":clear" => session.clear(),
            _ => match session.respond(&services.engine, message) {
                Ok(reply) => write_reply(&mut writer, &reply, &args, format)?,
                Err(e) => output::print_error(&e.to_string()),
            },
        }

        if interactive {
            write_prompt(&mut writer)?;
        }
    }

    if interactive {
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_prompt<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "{} ", colors::label(">"))?;
    writer.flush()
}

fn write_reply<W: Write>(
    writer: &mut W,
    reply: &ChatReply,
    args: &ChatArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if format == OutputFormat::Json {
        // History is available through :history; keep each line small
        let line = serde_json::json!({ "reply": reply.reply, "meta": reply.meta });
        writeln!(writer, "{line}")?;
        return Ok(());
    }

    writeln!(writer, "{}", reply.reply)?;
    if args.show_meta {
        if let Some(score) = reply.meta.score {
            let matched = reply.meta.matched_question.as_deref().unwrap_or("-");
            writeln!(
                writer,
                "{}",
                colors::dim(&format!(
                    "(score {}, matched \"{}\")",
                    output::format_score(score),
                    output::truncate_chars(matched, 60)
                ))
            )?;
        }
    }
    if let (Some(specialty), Some(url)) =
        (&reply.meta.suggested_specialty, &reply.meta.redirect_url)
    {
        writeln!(
            writer,
            "{} {} {}",
            colors::label("Suggested specialist:"),
            colors::tag(specialty),
            colors::dim(&format!("({url})"))
        )?;
    }
    Ok(())
}

fn write_history<W: Write>(
    writer: &mut W,
    session: &ChatSession,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let history = session.history();

    if format == OutputFormat::Json {
        writeln!(writer, "{}", serde_json::to_string(&history)?)?;
        return Ok(());
    }

    if history.is_empty() {
        writeln!(writer, "{}", colors::dim("(no messages yet)"))?;
        return Ok(());
    }

    for turn in &history {
        let who = match turn.role {
            ChatRole::User => colors::label("you"),
            ChatRole::Bot => colors::concept("bot"),
        };
        writeln!(
            writer,
            "{} {} {}",
            who,
            colors::dim(&format!("[{}]", output::format_relative_time(&turn.at))),
            output::truncate_chars(&turn.message, 80)
        )?;
    }
    Ok(())
}
