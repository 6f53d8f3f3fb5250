use serde::Serialize;
use std::path::{Path, PathBuf};

use super::component::Component;
use super::leftovers::{self, Leftover};
use super::plan::StepReport;
use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::utils::io;

/// Outcome of migrating one component file.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationResult {
    pub component: Component,
    pub path: String,
    pub steps: Vec<StepReport>,
    pub total_replacements: usize,
    /// Legacy shapes still present after rewriting.
    pub leftovers: Vec<Leftover>,
    pub changed: bool,
    pub written: bool,
}

/// `<components_dir>/<Component>.<ext>`
pub fn resolve_path(component: Component, defaults: &Defaults) -> PathBuf {
    defaults
        .components_dir()
        .join(component.file_name(&defaults.source_extension))
}

/// Apply the component's plan to `text`, returning the rewritten text and per-step counts.
pub fn migrate_text(component: Component, text: &str) -> Result<(String, Vec<StepReport>)> {
    let mut buffer = text.to_string();
    let steps = component.plan().apply(&mut buffer)?;
    Ok((buffer, steps))
}

/// Read `path`, rewrite it with the component's plan, and write it back.
pub fn migrate_file(component: Component, path: &Path) -> Result<MigrationResult> {
    if !path.is_file() {
        return Err(Error::component_file_not_found(
            component.name(),
            path.display().to_string(),
        ));
    }

    let original = io::read_source(path)?;
    let (migrated, steps) = migrate_text(component, &original)?;
    let total_replacements: usize = steps.iter().map(|s| s.replacements).sum();

    crate::log_status!(
        "migrate",
        "{}: {} replacements across {} steps",
        component,
        total_replacements,
        steps.len()
    );

    let leftovers = leftovers::scan(&migrated)?;
    for leftover in &leftovers {
        crate::log_status!(
            "migrate",
            "Unmigrated {:?} at {}:{}: {}",
            leftover.kind,
            leftover.line,
            leftover.column,
            leftover.matched
        );
    }

    let changed = migrated != original;
    let written = io::overwrite_if_changed(path, &original, &migrated)?;

    Ok(MigrationResult {
        component,
        path: path.display().to_string(),
        steps,
        total_replacements,
        leftovers,
        changed,
        written,
    })
}

/// Migrate a component at its configured location.
pub fn run(component: Component, defaults: &Defaults) -> Result<MigrationResult> {
    let path = resolve_path(component, defaults);
    migrate_file(component, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn defaults_for(dir: &Path) -> Defaults {
        Defaults {
            components_dir: dir.display().to_string(),
            ..Defaults::default()
        }
    }

    #[test]
    fn resolve_path_joins_file_name() {
        let defaults = defaults_for(Path::new("/srv/app/src/components"));
        assert_eq!(
            resolve_path(Component::SessionsZone, &defaults),
            PathBuf::from("/srv/app/src/components/SessionsZone.tsx")
        );
    }

    #[test]
    fn missing_file_is_component_error() {
        let dir = TempDir::new().unwrap();
        let err = run(Component::CaptureZone, &defaults_for(dir.path())).unwrap_err();
        assert_eq!(err.code.as_str(), "component.file_not_found");
    }

    #[test]
    fn single_dispatch_fixture() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CaptureZone.tsx");
        std::fs::write(&path, "dispatch({ type: 'ADD_NOTE', payload: noteObj });\n").unwrap();

        let result = migrate_file(Component::CaptureZone, &path).unwrap();

        assert!(result.written);
        assert_eq!(result.total_replacements, 1);
        assert!(result.leftovers.is_empty());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("addNote(noteObj);"));
    }

    #[test]
    fn untouched_file_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SessionsZone.tsx");
        std::fs::write(&path, "export const x = 1;\n").unwrap();

        let result = migrate_file(Component::SessionsZone, &path).unwrap();
        assert!(!result.changed);
        assert!(!result.written);
        assert_eq!(result.total_replacements, 0);
    }

    #[test]
    fn unmapped_dispatch_is_reported_not_failed() {
        let (text, _) = migrate_text(
            Component::SessionsZone,
            "dispatch({ type: 'ARCHIVE_SESSION', payload: id });",
        )
        .unwrap();
        let found = leftovers::scan(&text).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, leftovers::LeftoverKind::RawDispatch);
    }
}
