mod cli;
mod logging;

fn main() {
    let code = {
        let _log_guard = logging::init();
        match cli::run() {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("{e:#}"); // pretty anyhow chain
                1
            }
        }
    };
    std::process::exit(code);
}
