//! KMX-8 Librarian - patch librarian for the Ensoniq KMX-8
//!
//! Entry point for the application.

use std::process::ExitCode;

use kmx8_librarian::app::Librarian;
use kmx8_librarian::config::Configuration;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting KMX-8 Librarian");

    let mut librarian = Librarian::new(Configuration::load());

    // Populate the name label the way the spinbox does on startup.
    if let Err(e) = librarian.select_patch(1) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }
    librarian.drain_events();

    match librarian.dump() {
        Ok(dump) => {
            print!("{}", dump);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
