//! Ask command - answer a single question

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::io;
use std::sync::Arc;

/// Arguments for the ask command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question text (English, Hindi or Hinglish)
    pub query: String,

    /// Print the chat reply envelope (reply, specialty suggestion, history)
    #[arg(long)]
    pub reply: bool,
}

/// Execute the ask command
pub async fn execute(
    args: AskArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.reply {
        let mut session = services.new_session();
        let reply = session.respond(&services.engine, &args.query)?;

        match format {
            OutputFormat::Human => {
                println!("{}", reply.reply);
                if let (Some(specialty), Some(url)) =
                    (&reply.meta.suggested_specialty, &reply.meta.redirect_url)
                {
                    println!(
                        "{} {} {}",
                        colors::label("Suggested specialist:"),
                        colors::tag(specialty),
                        colors::dim(&format!("({url})"))
                    );
                }
            }
            OutputFormat::Json => output::print_json(&reply)?,
        }
        return Ok(());
    }

    let result = services.engine.best_answer(&args.query);

    match format {
        OutputFormat::Human => match &result {
            Some(result) => output::write_match(&mut io::stdout().lock(), result)?,
            None => {
                println!("{}", services.config.chat.fallback_reply);
                println!("{}", colors::dim("(no match)"));
            }
        },
        OutputFormat::Json => output::print_json(&result)?,
    }

    Ok(())
}
