//! Component migration: move call sites off the monolithic `useApp()` hook.
//!
//! Each supported component has a fixed, ordered plan of literal and regex
//! substitutions. The file is read once, rewritten in memory, scanned for
//! legacy shapes the plan missed, and written back in place.

mod capture_zone;
mod component;
mod leftovers;
mod plan;
mod rewrite;
mod runner;
mod sessions_zone;

pub use component::Component;
pub use leftovers::{Leftover, LeftoverKind};
pub use plan::{
    DispatchRewrite, MigrationPlan, Payload, StepReport, LEGACY_DESTRUCTURE, LEGACY_IMPORT,
};
pub use rewrite::{CompiledRewrite, Rewrite};
pub use runner::{migrate_file, migrate_text, resolve_path, run, MigrationResult};
