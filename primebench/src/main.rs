fn main() {
    if let Err(e) = primebench::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
