use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    mcpreg_cli::run()
}
