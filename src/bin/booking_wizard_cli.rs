use booking_wizard::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        tracing::error!(%err, "booking shell aborted");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
