use clap::Args;
use serde::Serialize;

use context_migrate::defaults;
use context_migrate::migrate::{self, Component, Leftover, MigrationResult, StepReport};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Component to migrate (SessionsZone, CaptureZone)
    pub component: String,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum MigrateOutput {
    #[serde(rename = "migrate")]
    Migrate {
        component: Component,
        path: String,
        message: String,
        steps: Vec<StepReport>,
        total_replacements: usize,
        leftovers: Vec<Leftover>,
        changed: bool,
        written: bool,
    },
}

pub fn run(args: MigrateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MigrateOutput> {
    let component: Component = args.component.parse()?;
    let defaults = defaults::load_defaults();

    let result = migrate::run(component, &defaults)?;
    let message = if result.written {
        format!("Migrated {}", result.path)
    } else {
        format!("No changes for {}", result.path)
    };
    eprintln!("{}", message);

    Ok((into_output(result, message), 0))
}

fn into_output(result: MigrationResult, message: String) -> MigrateOutput {
    MigrateOutput::Migrate {
        component: result.component,
        path: result.path,
        message,
        steps: result.steps,
        total_replacements: result.total_replacements,
        leftovers: result.leftovers,
        changed: result.changed,
        written: result.written,
    }
}
