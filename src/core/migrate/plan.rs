//! Ordered substitution plans and builders for the recurring rewrite shapes.
//!
//! Every component migration has the same outline: swap the legacy import,
//! replace the `useApp()` destructuring with the specialized hooks, retarget
//! `state.*` reads, then turn `dispatch({ type, payload })` calls into the
//! context methods. Order matters: later steps assume earlier ones already ran.

use heck::ToLowerCamelCase;
use serde::Serialize;

use super::rewrite::{CompiledRewrite, Rewrite};
use crate::error::Result;

/// The import line every legacy component carries.
pub const LEGACY_IMPORT: &str = "import { useApp } from '../context/AppContext';";

/// `const { state, dispatch } = useApp();` with any inner whitespace.
pub const LEGACY_DESTRUCTURE: &str = r"const\s+\{\s*state,\s*dispatch\s*\}\s*=\s*useApp\(\);";

/// Indentation of the second and later destructuring lines.
const HOOK_INDENT: &str = "  ";

/// How a dispatch payload is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// No payload: `dispatch({ type: 'X' });`
    None,
    /// Any expression up to the closing brace, trailing whitespace dropped.
    Expr,
    /// A brace-delimited object literal without nested braces.
    Object,
    /// A single-quoted string literal; the quotes are not captured.
    Quoted,
}

impl Payload {
    fn pattern(&self) -> &'static str {
        match self {
            Payload::None => "",
            Payload::Expr => r",\s*payload:\s*([^}]+?)",
            Payload::Object => r",\s*payload:\s*(\{[^}]+\})",
            Payload::Quoted => r",\s*payload:\s*'([^']+)'",
        }
    }

    fn rendered(&self) -> &'static str {
        match self {
            Payload::None => "",
            Payload::Expr | Payload::Object => "${1}",
            Payload::Quoted => "'${1}'",
        }
    }
}

#[derive(Debug, Clone)]
enum DispatchTarget {
    /// `method(payload);` or `method(payload.key, payload);`
    Method { name: String, key: Option<String> },
    /// Same action, sent through a narrower reducer dispatch.
    Redispatch { dispatcher: String },
}

/// Turns one legacy `dispatch({ type: 'ACTION', ... })` shape into its replacement.
///
/// The default target is a context method named after the action in lower
/// camel case (`ADD_NOTE` becomes `addNote`).
#[derive(Debug, Clone)]
pub struct DispatchRewrite {
    action: String,
    payload: Payload,
    target: DispatchTarget,
}

impl DispatchRewrite {
    pub fn new(action: impl Into<String>, payload: Payload) -> Self {
        let action = action.into();
        let name = action.to_lower_camel_case();
        Self {
            action,
            payload,
            target: DispatchTarget::Method { name, key: None },
        }
    }

    /// Call a differently named method.
    pub fn method(mut self, name: impl Into<String>) -> Self {
        let key = match self.target {
            DispatchTarget::Method { key, .. } => key,
            DispatchTarget::Redispatch { .. } => None,
        };
        self.target = DispatchTarget::Method {
            name: name.into(),
            key,
        };
        self
    }

    /// Pass `payload.<field>` as a leading argument before the payload itself.
    pub fn keyed_by(mut self, field: impl Into<String>) -> Self {
        if let DispatchTarget::Method { key, .. } = &mut self.target {
            *key = Some(field.into());
        }
        self
    }

    /// Keep the action object but send it through `dispatcher`.
    pub fn redispatch(mut self, dispatcher: impl Into<String>) -> Self {
        self.target = DispatchTarget::Redispatch {
            dispatcher: dispatcher.into(),
        };
        self
    }

    pub fn into_rewrite(self) -> Rewrite {
        let pattern = format!(
            r"\bdispatch\(\{{\s*type:\s*'{}'{}\s*\}}\);",
            regex::escape(&self.action),
            self.payload.pattern()
        );

        let payload = self.payload.rendered();
        let replacement = match &self.target {
            DispatchTarget::Method { name, key: Some(key) } if self.payload != Payload::None => {
                format!("{}({}.{}, {});", name, payload, key, payload)
            }
            DispatchTarget::Method { name, .. } => format!("{}({});", name, payload),
            DispatchTarget::Redispatch { dispatcher } => {
                if self.payload == Payload::None {
                    format!("{}({{ type: '{}' }});", dispatcher, self.action)
                } else {
                    format!(
                        "{}({{ type: '{}', payload: {} }});",
                        dispatcher, self.action, payload
                    )
                }
            }
        };

        Rewrite::pattern(format!("dispatch {}", self.action), pattern, replacement)
    }
}

/// Replacements made by one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub label: String,
    pub replacements: usize,
}

/// Ordered list of rewrites for one component.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    name: String,
    steps: Vec<Rewrite>,
}

impl MigrationPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rewrites(&self) -> &[Rewrite] {
        &self.steps
    }

    pub fn step(mut self, rewrite: Rewrite) -> Self {
        self.steps.push(rewrite);
        self
    }

    /// Swap the legacy `useApp` import for one import per hook.
    /// `useSessions` is imported from `../context/SessionsContext`.
    pub fn replace_import(self, hooks: &[&str]) -> Self {
        let imports = hooks
            .iter()
            .map(|&hook| {
                let context = hook.strip_prefix("use").unwrap_or(hook);
                format!("import {{ {} }} from '../context/{}Context';", hook, context)
            })
            .collect::<Vec<_>>()
            .join("\n");

        self.step(Rewrite::literal("imports", LEGACY_IMPORT, imports))
    }

    /// Replace the `useApp()` destructuring with one line per hook binding.
    pub fn replace_hook(self, bindings: &[&str]) -> Self {
        let separator = format!("\n{}", HOOK_INDENT);
        let joined = bindings.join(separator.as_str());
        self.step(Rewrite::pattern(
            "hook destructuring",
            LEGACY_DESTRUCTURE,
            escape_replacement(&joined),
        ))
    }

    /// `state.<field>` (word-bounded on both sides) becomes `target`.
    pub fn state_field(self, field: &str, target: &str) -> Self {
        self.step(Rewrite::pattern(
            format!("state.{}", field),
            format!(r"\bstate\.{}\b", regex::escape(field)),
            escape_replacement(target),
        ))
    }

    /// `state.<prefix>.` becomes `<target>.`, keeping whatever follows.
    pub fn state_prefix(self, prefix: &str, target: &str) -> Self {
        self.step(Rewrite::pattern(
            format!("state.{}.", prefix),
            format!(r"\bstate\.{}\.", regex::escape(prefix)),
            escape_replacement(&format!("{}.", target)),
        ))
    }

    pub fn dispatch(self, rewrite: DispatchRewrite) -> Self {
        self.step(rewrite.into_rewrite())
    }

    pub fn compile(&self) -> Result<Vec<CompiledRewrite>> {
        self.steps.iter().map(Rewrite::compile).collect()
    }

    /// Run every step over `text` in order. Lines inserted by a step use
    /// the buffer's own line ending.
    pub fn apply(&self, text: &mut String) -> Result<Vec<StepReport>> {
        let eol = line_ending(text);
        let compiled = self
            .steps
            .iter()
            .map(|step| step.with_line_ending(eol).compile())
            .collect::<Result<Vec<_>>>()?;

        Ok(compiled
            .iter()
            .map(|step| StepReport {
                label: step.label().to_string(),
                replacements: step.apply(text),
            })
            .collect())
    }
}

/// `\r\n` when the buffer already uses it, `\n` otherwise.
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Make `text` safe to use as a regex replacement that expands nothing.
fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(plan: &MigrationPlan, input: &str) -> String {
        let mut text = input.to_string();
        plan.apply(&mut text).unwrap();
        text
    }

    #[test]
    fn dispatch_defaults_to_camel_case_method() {
        let plan = MigrationPlan::new("t").dispatch(DispatchRewrite::new("ADD_NOTE", Payload::Expr));
        let out = run(&plan, "dispatch({ type: 'ADD_NOTE', payload: noteObj });");
        assert_eq!(out, "addNote(noteObj);");
    }

    #[test]
    fn expr_payload_spanning_lines_is_trimmed() {
        let plan =
            MigrationPlan::new("t").dispatch(DispatchRewrite::new("END_SESSION", Payload::Expr));
        let out = run(
            &plan,
            "dispatch({\n      type: 'END_SESSION',\n      payload: activeSession.id\n    });",
        );
        assert_eq!(out, "endSession(activeSession.id);");
    }

    #[test]
    fn keyed_method_passes_field_first() {
        let plan = MigrationPlan::new("t").dispatch(
            DispatchRewrite::new("ADD_SESSION_SCREENSHOT", Payload::Object)
                .method("addScreenshot")
                .keyed_by("sessionId"),
        );
        let out = run(
            &plan,
            "dispatch({ type: 'ADD_SESSION_SCREENSHOT', payload: { sessionId: id, screenshot } });",
        );
        assert_eq!(
            out,
            "addScreenshot({ sessionId: id, screenshot }.sessionId, { sessionId: id, screenshot });"
        );
    }

    #[test]
    fn redispatch_keeps_quoted_payload() {
        let plan = MigrationPlan::new("t").dispatch(
            DispatchRewrite::new("MARK_FEATURE_INTRODUCED", Payload::Quoted).redispatch("uiDispatch"),
        );
        let out = run(
            &plan,
            "dispatch({ type: 'MARK_FEATURE_INTRODUCED', payload: 'sessions' });",
        );
        assert_eq!(
            out,
            "uiDispatch({ type: 'MARK_FEATURE_INTRODUCED', payload: 'sessions' });"
        );
    }

    #[test]
    fn redispatch_without_payload() {
        let plan = MigrationPlan::new("t").dispatch(
            DispatchRewrite::new("TOGGLE_QUICK_CAPTURE", Payload::None).redispatch("uiDispatch"),
        );
        let out = run(&plan, "dispatch({type:'TOGGLE_QUICK_CAPTURE'});");
        assert_eq!(out, "uiDispatch({ type: 'TOGGLE_QUICK_CAPTURE' });");
    }

    #[test]
    fn dispatch_does_not_touch_other_actions() {
        let plan = MigrationPlan::new("t").dispatch(DispatchRewrite::new("ADD_NOTE", Payload::Expr));
        let input = "dispatch({ type: 'ADD_NOTES', payload: all });";
        assert_eq!(run(&plan, input), input);
    }

    #[test]
    fn state_field_respects_word_boundary() {
        let plan = MigrationPlan::new("t").state_field("notes", "notesState.notes");
        let out = run(&plan, "state.notes.length + state.notesArchive + mystate.notes");
        assert_eq!(out, "notesState.notes.length + state.notesArchive + mystate.notes");
    }

    #[test]
    fn state_prefix_keeps_suffix() {
        let plan = MigrationPlan::new("t").state_prefix("ui", "uiState");
        let out = run(&plan, "state.ui.activeTab === 'x'");
        assert_eq!(out, "uiState.activeTab === 'x'");
    }

    #[test]
    fn import_lines_follow_hook_names() {
        let plan = MigrationPlan::new("t").replace_import(&["useSessions", "useUI"]);
        let out = run(&plan, LEGACY_IMPORT);
        assert_eq!(
            out,
            "import { useSessions } from '../context/SessionsContext';\nimport { useUI } from '../context/UIContext';"
        );
    }

    #[test]
    fn hook_bindings_are_indented() {
        let plan = MigrationPlan::new("t").replace_hook(&[
            "const { a } = useA();",
            "const { b } = useB();",
        ]);
        let out = run(&plan, "  const {state, dispatch} = useApp();");
        assert_eq!(out, "  const { a } = useA();\n  const { b } = useB();");
    }

    #[test]
    fn crlf_buffer_keeps_crlf_in_inserted_lines() {
        let plan = MigrationPlan::new("t")
            .replace_import(&["useSessions", "useUI"])
            .replace_hook(&["const { a } = useA();", "const { b } = useB();"]);
        let input = format!(
            "{}\r\n\r\n  const {{ state, dispatch }} = useApp();\r\n",
            LEGACY_IMPORT
        );

        let out = run(&plan, &input);
        assert!(out.contains("SessionsContext';\r\nimport { useUI }"));
        assert!(out.contains("useA();\r\n  const { b }"));
        assert!(!out.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn replacement_dollar_signs_are_literal() {
        let plan = MigrationPlan::new("t").state_field("price", "$price");
        assert_eq!(run(&plan, "state.price"), "$price");
    }

    #[test]
    fn step_reports_follow_plan_order() {
        let plan = MigrationPlan::new("t")
            .state_field("tasks", "tasksState.tasks")
            .dispatch(DispatchRewrite::new("ADD_TASK", Payload::Expr));
        let mut text = "state.tasks; state.tasks; dispatch({ type: 'ADD_TASK', payload: t });".to_string();

        let reports = plan.apply(&mut text).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].label, "state.tasks");
        assert_eq!(reports[0].replacements, 2);
        assert_eq!(reports[1].label, "dispatch ADD_TASK");
        assert_eq!(reports[1].replacements, 1);
    }
}
