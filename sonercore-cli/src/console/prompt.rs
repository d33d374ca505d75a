use nu_ansi_term::Color;

use super::context::ConsoleContext;

/// Prompt string for the current console state.
pub fn render_prompt(context: &ConsoleContext, color: bool) -> String {
    let label = context.prompt_label();
    if color {
        format!("{} > ", Color::Cyan.bold().paint(label))
    } else {
        format!("{} > ", label)
    }
}
