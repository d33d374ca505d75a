use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use atty::Stream;
use rustyline::{error::ReadlineError, DefaultEditor};

use sonercore::render::Style;
use sonercore::AnalysisService;

use crate::console::commands::parse_line;
use crate::console::context::{ConsoleContext, Step};
use crate::console::prompt::render_prompt;

/// Start the console. Interactive on a terminal, line-by-line otherwise.
pub async fn run_repl(
    service: Arc<dyn AnalysisService>,
    repo_url: Option<String>,
    style: Style,
) -> Result<()> {
    let mut ctx = ConsoleContext::new(service, repo_url, style);

    if atty::is(Stream::Stdin) {
        println!("SonerCore console (type `help` for commands, `exit` to quit).");
        run_interactive(&mut ctx, style).await?;
    } else {
        run_batch(&mut ctx).await?;
    }

    Ok(())
}

async fn run_interactive(ctx: &mut ConsoleContext, style: Style) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let prompt = render_prompt(ctx, style.color);
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);
                if process_line(ctx, trimmed).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupt)");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                return Err(anyhow!("reading console input: {err}"));
            }
        }
    }

    Ok(())
}

async fn run_batch(ctx: &mut ConsoleContext) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if process_line(ctx, trimmed).await {
            break;
        }
    }
    Ok(())
}

/// Run one line. Returns true when the console should stop.
async fn process_line(ctx: &mut ConsoleContext, line: &str) -> bool {
    match parse_line(line) {
        Ok(command) => match ctx.execute(command).await {
            Step::Exit => true,
            Step::Continue(output) => {
                print!("{}", output);
                false
            }
        },
        Err(err) => {
            eprintln!("{}", err.render());
            false
        }
    }
}
