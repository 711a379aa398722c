use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::PromptStore;

pub fn run<B: StorageBackend>(store: &PromptStore<B>) -> Result<CmdResult> {
    let _lock = store.lock()?;
    let report = store.reconcile()?;

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::success(
            "AppSettings.json already matches the library.",
        ));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
    if !report.adopted.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "  - Added {} prompt(s) found on disk but missing from the list: {}",
            report.adopted.len(),
            report.adopted.join(", ")
        )));
    }
    if !report.evicted.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Removed {} list entr{} with no prompt file: {}",
            report.evicted.len(),
            if report.evicted.len() == 1 { "y" } else { "ies" },
            report.evicted.join(", ")
        )));
    }
    Ok(result)
}
