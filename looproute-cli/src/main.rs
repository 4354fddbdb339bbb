//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    colog::init();
    if let Err(err) = looproute_cli::run() {
        eprintln!("looproute: {err}");
        std::process::exit(1);
    }
}
