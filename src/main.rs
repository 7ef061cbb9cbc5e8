mod app_core;
mod overlay;
mod runtime;
mod svg_view;
mod yew_app;

use app_core::AppCore;
use madori_core::RecordStore;
use yew_app::{App, AppProps};

const UNIT_DATA_JSON: &str = include_str!("../assets/data.json");

fn main() {
    let core = AppCore::new();
    match RecordStore::from_json(UNIT_DATA_JSON) {
        Ok(store) => {
            gloo::console::log!("unit records loaded", store.len() as u32);
            core.load_records(store);
        }
        Err(err) => {
            // An unparseable asset degrades to an empty plan, not a crash.
            gloo::console::error!("unit records failed to parse", err.to_string());
        }
    }
    yew::Renderer::<App>::with_props(AppProps { core }).render();
}
