use std::process::ExitCode;

fn main() -> ExitCode {
    greeter::app::cli::run()
}
