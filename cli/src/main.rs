//! Binary entrypoint for cssbundle

fn main() {
    if let Err(err) = cssbundle_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
