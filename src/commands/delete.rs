use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PrompterError, Result};
use crate::store::backend::StorageBackend;
use crate::store::{PromptStore, Selector};

pub fn run<B: StorageBackend>(
    store: &PromptStore<B>,
    selector: &Selector,
    confirm: bool,
) -> Result<CmdResult> {
    let _lock = store.lock()?;

    let matches = store.find(selector)?;
    if matches.is_empty() {
        return Err(PrompterError::NotFound(selector.to_string()));
    }

    // Names are not unique; deleting several under one name needs an
    // explicit confirmation. GUID and filename selectors match at most one.
    if let Selector::Name(name) = selector {
        if matches.len() > 1 && !confirm {
            return Err(PrompterError::AmbiguousName(name.clone(), matches.len()));
        }
    }

    // Each record's file removal and list update stand alone: one failure
    // is recorded and the loop moves on, so a bad file cannot wedge the
    // whole batch.
    let mut result = CmdResult::default();
    for stored in matches {
        if let Err(e) = store.remove(&stored) {
            result.add_message(CmdMessage::error(format!(
                "Failed to delete {}: {}",
                stored.file, e
            )));
            continue;
        }

        let settings_update = store.load_settings().and_then(|mut settings| {
            settings.remove(&stored.prompt.guid);
            store.save_settings(&settings)
        });
        match settings_update {
            Ok(()) => {
                result.add_message(CmdMessage::success(format!(
                    "Deleted: {} ({})",
                    stored.file, stored.prompt.guid
                )));
                result.affected.push(stored);
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!(
                    "Deleted {} but the settings update failed ({}); run doctor to repair",
                    stored.file, e
                )));
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create::{self, CreateRequest};
    use crate::store::mem_backend::MemBackend;

    fn store() -> PromptStore<MemBackend> {
        PromptStore::with_backend(MemBackend::new())
    }

    fn create(store: &PromptStore<MemBackend>, name: &str) -> crate::store::StoredPrompt {
        create::run(
            store,
            CreateRequest {
                name: name.to_string(),
                chapters: vec!["line".to_string()],
                ..Default::default()
            },
        )
        .unwrap()
        .affected
        .remove(0)
    }

    #[test]
    fn test_delete_by_guid() {
        let store = store();
        let stored = create(&store, "Intro");
        let result = run(&store, &Selector::Guid(stored.prompt.guid.clone()), false).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert!(store.scan().unwrap().prompts.is_empty());
        assert!(store.load_settings().unwrap().guids().is_empty());
    }

    #[test]
    fn test_delete_by_filename() {
        let store = store();
        let stored = create(&store, "Intro");
        run(&store, &Selector::Filename(stored.file.clone()), false).unwrap();
        assert!(store.scan().unwrap().prompts.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = store();
        let err = run(&store, &Selector::Name("Ghost".to_string()), false).unwrap_err();
        assert!(matches!(err, PrompterError::NotFound(_)));
    }

    #[test]
    fn test_ambiguous_name_requires_confirmation() {
        let store = store();
        create(&store, "Intro");
        create(&store, "Intro");

        let err = run(&store, &Selector::Name("Intro".to_string()), false).unwrap_err();
        assert!(matches!(err, PrompterError::AmbiguousName(_, 2)));
        // Nothing was touched.
        assert_eq!(store.scan().unwrap().prompts.len(), 2);
        assert_eq!(store.load_settings().unwrap().guids().len(), 2);
    }

    #[test]
    fn test_confirmed_bulk_delete_removes_all_matches() {
        let store = store();
        create(&store, "Intro");
        create(&store, "Intro");
        create(&store, "Outro");

        let result = run(&store, &Selector::Name("Intro".to_string()), true).unwrap();
        assert_eq!(result.affected.len(), 2);
        assert_eq!(store.scan().unwrap().prompts.len(), 1);
        assert_eq!(store.load_settings().unwrap().guids().len(), 1);
    }

    #[test]
    fn test_single_name_match_needs_no_confirmation() {
        let store = store();
        create(&store, "Intro");
        run(&store, &Selector::Name("intro".to_string()), false).unwrap();
        assert!(store.scan().unwrap().prompts.is_empty());
    }

    #[test]
    fn test_settings_failure_is_collected_not_fatal() {
        let store = store();
        let stored = create(&store, "Intro");
        store.backend.set_fail_settings_writes(true);

        let result = run(&store, &Selector::Guid(stored.prompt.guid.clone()), false).unwrap();
        assert!(result.has_errors());
        assert!(result.affected.is_empty());
        // The file is gone, the list entry remains: divergence for doctor.
        assert!(store.scan().unwrap().prompts.is_empty());
        store.backend.set_fail_settings_writes(false);
        assert_eq!(store.load_settings().unwrap().guids().len(), 1);
        let report = store.reconcile().unwrap();
        assert_eq!(report.evicted.len(), 1);
    }
}
