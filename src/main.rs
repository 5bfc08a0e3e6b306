use std::process::ExitCode;

fn main() -> ExitCode {
    match chess_rules::console::run_console_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
