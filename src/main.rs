use leptos::prelude::*;
use pipeguide::{logging, App};
use pipeguide_core::PageConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = PageConfig::embedded();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(level).expect("error initializing logger");

    let config = PageConfig::or_default(loaded);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
