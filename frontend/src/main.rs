use log::{error, info};

mod config;
mod error;
mod page {
    pub mod bindings;
    pub mod effects;
    pub mod elements;
}
mod interactions {
    pub mod navigation;
    pub mod scroll;
}
mod contact {
    pub mod submission;
    pub mod validation;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    if let Err(e) = page::bindings::start() {
        error!("Landing page bindings aborted: {}", e);
    }
}
