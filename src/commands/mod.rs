pub type CmdResult<T> = context_migrate::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod migrate;

pub(crate) fn run_json(
    args: migrate::MigrateArgs,
    global: &GlobalArgs,
) -> (context_migrate::Result<serde_json::Value>, i32) {
    crate::output::map_cmd_result_to_json(migrate::run(args, global))
}
