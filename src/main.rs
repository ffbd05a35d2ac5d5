//! rAttendance main entrypoint.

use env_logger::Env;
use rattendance::run;
use rattendance::ui::messages::error;

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
