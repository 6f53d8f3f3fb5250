//! `SessionsZone` moves onto `useSessions` and `useUI`.

use super::plan::{DispatchRewrite, MigrationPlan, Payload};

const SESSION_BINDINGS: &str = "const { sessions, activeSessionId, startSession, endSession, pauseSession, resumeSession, updateSession, deleteSession, addScreenshot, addAudioSegment } = useSessions();";
const UI_BINDINGS: &str =
    "const { state: uiState, dispatch: uiDispatch, addNotification } = useUI();";

/// Session lifecycle actions that map one-to-one onto `useSessions` methods.
const SESSION_ACTIONS: &[&str] = &[
    "START_SESSION",
    "END_SESSION",
    "PAUSE_SESSION",
    "RESUME_SESSION",
    "UPDATE_SESSION",
    "DELETE_SESSION",
];

pub fn plan() -> MigrationPlan {
    let mut plan = MigrationPlan::new("SessionsZone")
        .replace_import(&["useSessions", "useUI"])
        .replace_hook(&[SESSION_BINDINGS, UI_BINDINGS])
        .state_field("sessions", "sessions")
        .state_field("activeSessionId", "activeSessionId")
        .state_prefix("ui", "uiState")
        .state_field("onboarding", "uiState.onboarding")
        .dispatch(
            DispatchRewrite::new("MARK_FEATURE_INTRODUCED", Payload::Quoted)
                .redispatch("uiDispatch"),
        )
        .dispatch(DispatchRewrite::new("ADD_NOTIFICATION", Payload::Object));

    for action in SESSION_ACTIONS {
        plan = plan.dispatch(DispatchRewrite::new(*action, Payload::Expr));
    }

    plan.dispatch(
        DispatchRewrite::new("ADD_SESSION_SCREENSHOT", Payload::Object)
            .method("addScreenshot")
            .keyed_by("sessionId"),
    )
    .dispatch(
        DispatchRewrite::new("ADD_SESSION_AUDIO_SEGMENT", Payload::Object)
            .method("addAudioSegment")
            .keyed_by("sessionId"),
    )
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
        assert_eq!(plan.compile().unwrap().len(), plan.rewrites().len());
        assert_eq!(plan.rewrites()[0].label(), "imports");
        assert_eq!(plan.rewrites()[1].label(), "hook destructuring");
    }

    #[test]
    fn session_lifecycle_calls_become_methods() {
        let out = migrate(
            "dispatch({ type: 'START_SESSION', payload: newSession });\n\
             dispatch({ type: 'PAUSE_SESSION', payload: id });\n\
             dispatch({ type: 'RESUME_SESSION', payload: id });\n\
             dispatch({ type: 'DELETE_SESSION', payload: id });",
        );
        assert_eq!(
            out,
            "startSession(newSession);\npauseSession(id);\nresumeSession(id);\ndeleteSession(id);"
        );
    }

    #[test]
    fn audio_segment_is_keyed_by_session() {
        let out = migrate(
            "dispatch({ type: 'ADD_SESSION_AUDIO_SEGMENT', payload: { sessionId: s.id, segment } });",
        );
        assert_eq!(
            out,
            "addAudioSegment({ sessionId: s.id, segment }.sessionId, { sessionId: s.id, segment });"
        );
    }

    #[test]
    fn onboarding_reads_move_to_ui_state() {
        let out = migrate("if (!state.onboarding.completed && state.ui.showTips) {}");
        assert_eq!(out, "if (!uiState.onboarding.completed && uiState.showTips) {}");
    }

    #[test]
    fn notification_object_is_passed_through() {
        let out = migrate(
            "dispatch({ type: 'ADD_NOTIFICATION', payload: { type: 'success', title: 'Saved' } });",
        );
        assert_eq!(out, "addNotification({ type: 'success', title: 'Saved' });");
    }
}
