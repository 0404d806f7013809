use clap::{Parser, Subcommand};

mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the bootstrap simulation described by a config file
    Run(#[clap(flatten)] run::RunArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Run(run::RunArg::default())) {
        Mode::Run(arg) => run::run(&arg)?,
    }
    Ok(())
}
