use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use teleprompt::commands::{CmdMessage, MessageLevel};
use teleprompt::store::StoredPrompt;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_prompts(prompts: &[StoredPrompt], show_chapters: bool) {
    if prompts.is_empty() {
        println!("No prompts found.");
        return;
    }

    let mut headers = vec!["index", "friendlyName", "GUID", "chaptersCount", "file"];
    if show_chapters {
        headers.push("chapters");
    }

    let rows: Vec<Vec<String>> = prompts
        .iter()
        .map(|stored| {
            let mut row = vec![
                stored.prompt.index.to_string(),
                stored.prompt.name.clone(),
                stored.prompt.guid.clone(),
                stored.prompt.chapters.len().to_string(),
                stored.file.clone(),
            ];
            if show_chapters {
                row.push(stored.prompt.chapters.join(" | "));
            }
            row
        })
        .collect();

    // Column widths are display widths, not byte lengths; names can carry
    // wide characters.
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("{}", format_row(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
