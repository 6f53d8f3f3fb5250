//! `CaptureZone` reads from all six specialized contexts.

use super::plan::{DispatchRewrite, MigrationPlan, Payload};

const HOOKS: &[&str] = &[
    "useSettings",
    "useUI",
    "useEntities",
    "useNotes",
    "useTasks",
    "useSessions",
];

const BINDINGS: &[&str] = &[
    "const { state: settingsState } = useSettings();",
    "const { state: uiState, dispatch: uiDispatch, addNotification, addProcessingJob } = useUI();",
    "const { state: entitiesState, addTopic } = useEntities();",
    "const { addNote, updateNote } = useNotes();",
    "const { addTask } = useTasks();",
    "const { sessions } = useSessions();",
];

/// `state.<field>` reads and the context state they now live on.
const STATE_FIELDS: &[(&str, &str)] = &[
    ("aiSettings", "settingsState.aiSettings"),
    ("userProfile", "settingsState.userProfile"),
    ("nedSettings", "settingsState.nedSettings"),
];

const LATER_STATE_FIELDS: &[(&str, &str)] = &[
    ("quickCaptureOpen", "uiState.quickCaptureOpen"),
    ("companies", "entitiesState.companies"),
    ("contacts", "entitiesState.contacts"),
    ("topics", "entitiesState.topics"),
    ("notes", "notesState.notes"),
    ("tasks", "tasksState.tasks"),
    ("sessions", "sessions"),
];

pub fn plan() -> MigrationPlan {
    let mut plan = MigrationPlan::new("CaptureZone")
        .replace_import(HOOKS)
        .replace_hook(BINDINGS);

    for (field, target) in STATE_FIELDS {
        plan = plan.state_field(field, target);
    }
    plan = plan.state_prefix("ui", "uiState");
    for (field, target) in LATER_STATE_FIELDS {
        plan = plan.state_field(field, target);
    }

    plan.dispatch(DispatchRewrite::new("ADD_NOTIFICATION", Payload::Object))
        .dispatch(DispatchRewrite::new("ADD_PROCESSING_JOB", Payload::Object))
        .dispatch(DispatchRewrite::new("ADD_TOPIC", Payload::Expr))
        .dispatch(DispatchRewrite::new("ADD_NOTE", Payload::Expr))
        .dispatch(DispatchRewrite::new("UPDATE_NOTE", Payload::Expr))
        .dispatch(DispatchRewrite::new("ADD_TASK", Payload::Expr))
        .dispatch(
            DispatchRewrite::new("TOGGLE_QUICK_CAPTURE", Payload::None).redispatch("uiDispatch"),
        )
        .dispatch(DispatchRewrite::new("SET_ACTIVE_TAB", Payload::Expr).redispatch("uiDispatch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migrate(input: &str) -> String {
        let mut text = input.to_string();
        plan().apply(&mut text).unwrap();
        text
    }

    #[test]
    fn plan_compiles() {
        let plan = plan();
        assert_eq!(plan.name(), "CaptureZone");
        assert!(plan.compile().is_ok());
    }

    #[test]
    fn imports_cover_every_context() {
        let out = migrate(super::super::plan::LEGACY_IMPORT);
        assert_eq!(out.lines().count(), 6);
        assert!(out.contains("import { useEntities } from '../context/EntitiesContext';"));
        assert!(out.contains("import { useTasks } from '../context/TasksContext';"));
        assert!(!out.contains("AppContext"));
    }

    #[test]
    fn settings_and_entities_reads_are_retargeted() {
        let out = migrate("const model = state.aiSettings.model; const list = state.companies;");
        assert_eq!(
            out,
            "const model = settingsState.aiSettings.model; const list = entitiesState.companies;"
        );
    }

    #[test]
    fn note_calls_become_methods() {
        let out = migrate(
            "dispatch({ type: 'ADD_NOTE', payload: noteObj });\ndispatch({ type: 'UPDATE_NOTE', payload: updated });",
        );
        assert_eq!(out, "addNote(noteObj);\nupdateNote(updated);");
    }

    #[test]
    fn processing_job_and_topic() {
        let out = migrate(
            "dispatch({ type: 'ADD_PROCESSING_JOB', payload: { id: jobId, status: 'queued' } });\n\
             dispatch({ type: 'ADD_TOPIC', payload: topic });",
        );
        assert_eq!(
            out,
            "addProcessingJob({ id: jobId, status: 'queued' });\naddTopic(topic);"
        );
    }

    #[test]
    fn ui_actions_go_through_ui_dispatch() {
        let out = migrate(
            "dispatch({ type: 'TOGGLE_QUICK_CAPTURE' });\ndispatch({ type: 'SET_ACTIVE_TAB', payload: 'library' });",
        );
        assert_eq!(
            out,
            "uiDispatch({ type: 'TOGGLE_QUICK_CAPTURE' });\nuiDispatch({ type: 'SET_ACTIVE_TAB', payload: 'library' });"
        );
    }
}
