mod command;
mod config;
mod data;
mod plot;
mod report;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
