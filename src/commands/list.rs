use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::PromptStore;

/// List every readable prompt, sorted by index with GUID as the tie-break
/// so equal indices still list deterministically.
///
/// Read-only: malformed files and any store/settings divergence are reported
/// as warnings, never repaired here. `doctor` does the repairing.
pub fn run<B: StorageBackend>(store: &PromptStore<B>) -> Result<CmdResult> {
    let scan = store.scan()?;
    let mut result = CmdResult::default();

    for skipped in &scan.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipping {}: {}",
            skipped.file, skipped.reason
        )));
    }

    let mut prompts = scan.prompts;
    prompts.sort_by(|a, b| {
        a.prompt
            .index
            .cmp(&b.prompt.index)
            .then_with(|| a.prompt.guid.cmp(&b.prompt.guid))
    });

    let settings = store.load_settings()?;
    let listed_guids = settings.guids();
    for stored in &prompts {
        if !listed_guids
            .iter()
            .any(|g| g.eq_ignore_ascii_case(&stored.prompt.guid))
        {
            result.add_message(CmdMessage::warning(format!(
                "{} is not in AppSettings.json; run doctor to repair",
                stored.file
            )));
        }
    }
    for guid in &listed_guids {
        if !prompts
            .iter()
            .any(|s| s.prompt.guid.eq_ignore_ascii_case(guid))
        {
            result.add_message(CmdMessage::warning(format!(
                "Settings entry {} has no prompt file; run doctor to repair",
                guid
            )));
        }
    }

    result.listed = prompts;
    Ok(result)
}
