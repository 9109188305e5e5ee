use leaderboards::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    Cli::run()
}
