// Entrypoint for the CLI uploader.
// - Keeps `main` small: parse the positional arguments, run one upload,
//   map the boolean outcome to the process exit code.

use std::process::ExitCode;

use webui_upload::cli;

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Some(args) => args,
        None => {
            println!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    if cli::run(&args) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
