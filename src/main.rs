use std::process::ExitCode;

use hostess::error::HostessError;

fn main() -> ExitCode {
    match hostess::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<HostessError>() {
            Some(err) => {
                eprintln!("{}", err.user_message());
                ExitCode::from(err.exit_code())
            }
            None => {
                eprintln!("error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
