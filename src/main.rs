fn main() {
    if let Err(e) = commafix::cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
