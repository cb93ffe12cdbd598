fn main() {
    heimdall_launch::logger::init_logger();
    if let Err(err) = heimdall_cli::run() {
        for cause in err.chain() {
            eprintln!("{}", cause);
        }
        std::process::exit(1);
    }
}
