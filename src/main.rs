use std::error::Error;

use clap::Parser;
use tfsfetch::{
    cli::{
        args::{CliArgs, Command},
        command_handlers::{do_connection_data, do_fetch, do_icon},
    },
    TeamFoundationSource,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = CliArgs::parse();

    let mut builder = TeamFoundationSource::builder();
    if let Some(program) = cli_args.git_program {
        builder = builder.git_program(program);
    }
    if let Some(path) = cli_args.icon_path {
        builder = builder.icon_path(path);
    }

    match cli_args.cmd {
        Command::Fetch(args) => do_fetch(builder, &args),
        Command::Icon => do_icon(builder),
        Command::ConnectionData => do_connection_data(builder),
    }
}
