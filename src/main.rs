use clap::{CommandFactory, Parser};

use context_migrate::ErrorCode;

mod commands;
mod output;

use commands::migrate::MigrateArgs;
use commands::GlobalArgs;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "context-migrate")]
#[command(version = VERSION)]
#[command(about = "Move a component off useApp() onto the specialized context hooks")]
#[command(after_help = "Example: context-migrate SessionsZone")]
struct Cli {
    #[command(flatten)]
    migrate: MigrateArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.migrate, &global);

    if matches!(&json_result, Err(err) if err.code == ErrorCode::ValidationInvalidArgument) {
        eprintln!("{}", Cli::command().render_usage());
    }

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
