use crate::catalog::ModelDescriptor;
use crate::utils::text::{display_width, wrap_text};
use console::style;

/// Display an assistant reply in a formatted box, wrapped to the terminal.
pub fn display_response(response: &str) {
    let term = console::Term::stdout();
    let terminal_width = term.size().1 as usize;
    let max_width = std::cmp::min(terminal_width.saturating_sub(4), 120).max(60);

    let wrapped = wrap_text(response, max_width.saturating_sub(4));

    let content_max = wrapped.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let box_width = std::cmp::min(max_width, content_max + 4);

    let top_border = "┌".to_string() + &"─".repeat(box_width - 2) + "┐";
    let bottom_border = "└".to_string() + &"─".repeat(box_width - 2) + "┘";

    println!("\n{}", style("🤖 ASSISTANT").bold().blue());
    println!("{}", style(&top_border).dim().blue());

    for line in wrapped {
        let padding = box_width.saturating_sub(display_width(&line) + 3);
        println!("│ {}{}│", style(&line).bold().white(), " ".repeat(padding));
    }

    println!("{}", style(&bottom_border).dim().blue());
}

/// Render a reply that looks like markdown.
pub fn display_markdown(response: &str) {
    termimad::print_text(response);
}

/// True when the reply carries markdown markers worth rendering.
pub fn looks_like_markdown(response: &str) -> bool {
    response.contains("```")
        || response.contains('*')
        || response.contains('`')
        || response.contains('#')
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("✗").bold().red(), style(message).red());
}

/// Banner printed when an interactive session starts.
pub fn display_chat_banner(model: &ModelDescriptor, has_token: bool) {
    println!(
        "{} {}",
        style("Model:").bold().cyan(),
        style(format!("{} ({})", model.label, model.id)).white()
    );
    if !has_token {
        println!(
            "{}",
            style("No API token set. Use /token <key> before sending messages.")
                .bold()
                .yellow()
        );
    }
    println!(
        "Type '/help' for available commands. Press Ctrl+D or type /quit to exit."
    );
}
