use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use teleprompt::api::PrompterApi;
use teleprompt::commands::create::CreateRequest;
use teleprompt::config::{resolve_library_dir, LibraryPaths};
use teleprompt::error::{PrompterError, Result};
use teleprompt::store::{Selector, StoredPrompt};

use super::print::{print_messages, print_prompts};
use super::setup::{Cli, Commands, DelTarget, SortColumn};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let dir = resolve_library_dir(cli.dir.clone());
    let api = PrompterApi::open(LibraryPaths::new(dir));

    match cli.command {
        Commands::Add {
            name,
            chapters,
            chapters_file,
            from_stdin,
            index,
            guid,
            dry_run,
        } => {
            let chapters = collect_chapters(chapters, chapters_file, from_stdin)?;
            if chapters.is_empty() {
                return Err(PrompterError::Store(
                    "provide at least one chapter (use --chapter, --chapters-file, or --from-stdin)"
                        .to_string(),
                ));
            }
            let result = api.add_prompt(CreateRequest {
                name,
                chapters,
                guid,
                index,
                dry_run,
            })?;
            print_messages(&result.messages);
            Ok(())
        }

        Commands::Del { target, yes } => {
            let result = api.delete_prompts(&selector_from(target), yes)?;
            let failed = result.has_errors();
            print_messages(&result.messages);
            if failed {
                // Partial success: some records stayed behind.
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Ls {
            sort,
            reverse,
            limit,
            show_chapters,
        } => {
            let result = api.list_prompts()?;
            print_messages(&result.messages);

            let mut prompts = result.listed;
            sort_prompts(&mut prompts, sort);
            if reverse {
                prompts.reverse();
            }
            if let Some(limit) = limit {
                prompts.truncate(limit);
            }
            print_prompts(&prompts, show_chapters);
            Ok(())
        }

        Commands::Doctor => {
            let result = api.doctor()?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn selector_from(target: DelTarget) -> Selector {
    // clap's group guarantees exactly one is set.
    if let Some(guid) = target.guid {
        Selector::Guid(guid)
    } else if let Some(name) = target.name {
        Selector::Name(name)
    } else {
        Selector::Filename(target.file.unwrap_or_default())
    }
}

/// Merge chapters from flags, a file, and stdin, in that order. Blank lines
/// are dropped; the Prompter renders them as empty chapters otherwise.
fn collect_chapters(
    flags: Vec<String>,
    file: Option<PathBuf>,
    from_stdin: bool,
) -> Result<Vec<String>> {
    let mut chapters = flags;
    if let Some(path) = file {
        let text = fs::read_to_string(&path)?;
        chapters.extend(nonblank_lines(&text));
    }
    if from_stdin {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        chapters.extend(nonblank_lines(&text));
    }
    Ok(chapters)
}

fn nonblank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn sort_prompts(prompts: &mut [StoredPrompt], column: SortColumn) {
    match column {
        // Already in (index, guid) order from the command layer.
        SortColumn::Index => {}
        SortColumn::Name => prompts.sort_by_key(|s| s.prompt.name.to_lowercase()),
        SortColumn::Guid => prompts.sort_by(|a, b| a.prompt.guid.cmp(&b.prompt.guid)),
        SortColumn::File => prompts.sort_by(|a, b| a.file.cmp(&b.file)),
    }
}
