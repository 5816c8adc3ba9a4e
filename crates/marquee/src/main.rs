use marquee::config;
use marquee::gui::app::AppModel;
use marquee::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    match config::write_default_config() {
        Ok(path) => log::debug!("Config file at {}", path.display()),
        Err(e) => log::warn!("Could not materialize default config: {}", e),
    }
    let config = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx.clone());

    let app = RelmApp::new("org.fairground.marquee");

    app.run::<AppModel>((config, tx, rx));
}
