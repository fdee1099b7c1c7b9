fn main() {
    if let Err(err) = focus_canvas::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
