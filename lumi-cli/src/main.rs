//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = lumi_cli::run() {
        eprintln!("lumi: {err}");
        std::process::exit(1);
    }
}
