use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PrompterError, Result};
use crate::model::{generate_guid, normalize_guid, Prompt};
use crate::store::backend::StorageBackend;
use crate::store::PromptStore;

/// Inputs for creating a prompt. GUID and index are normally allocated;
/// explicit values exist for restoring known records.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub name: String,
    pub chapters: Vec<String>,
    pub guid: Option<String>,
    pub index: Option<u32>,
    /// Build and return the prompt without touching disk.
    pub dry_run: bool,
}

pub fn run<B: StorageBackend>(store: &PromptStore<B>, req: CreateRequest) -> Result<CmdResult> {
    if req.name.trim().is_empty() {
        return Err(PrompterError::Store(
            "a prompt needs a non-empty name".to_string(),
        ));
    }

    let guid = match &req.guid {
        Some(raw) => normalize_guid(raw)?,
        None => generate_guid(),
    };

    let mut result = CmdResult::default();

    if req.dry_run {
        // Index allocation still consults the store so the preview matches
        // what a real run would produce.
        let index = resolve_index(store, req.index)?;
        let prompt = Prompt::new(req.name, req.chapters, guid, index);
        result.add_message(CmdMessage::info(format!(
            "Dry run, would create: {}",
            prompt.filename()
        )));
        result.affected.push(crate::store::StoredPrompt {
            file: prompt.filename(),
            prompt,
        });
        return Ok(result);
    }

    let _lock = store.lock()?;

    let index = resolve_index(store, req.index)?;
    let prompt = Prompt::new(req.name, req.chapters, guid, index);

    // First durability point: the record file.
    let stored = store.write(&prompt)?;

    // Second durability point: the library list. A failure between the two
    // leaves an orphaned file; report it rather than papering over it.
    let mut settings = store.load_settings()?;
    settings.add(&stored.prompt.guid);
    if let Err(e) = store.save_settings(&settings) {
        return Err(PrompterError::PartialSync(format!(
            "{} was written but the settings update failed ({}); run doctor to repair",
            stored.file, e
        )));
    }

    result.add_message(CmdMessage::success(format!("Created: {}", stored.file)));
    result.add_message(CmdMessage::info(format!(
        "Settings updated: +{}",
        stored.prompt.guid
    )));
    result.affected.push(stored);
    Ok(result)
}

/// Auto-allocation is max existing index + 1; an empty library starts at 1.
fn resolve_index<B: StorageBackend>(
    store: &PromptStore<B>,
    explicit: Option<u32>,
) -> Result<u32> {
    match explicit {
        Some(index) => Ok(index),
        None => Ok(store.max_index()?.map_or(1, |max| max + 1)),
    }
}
