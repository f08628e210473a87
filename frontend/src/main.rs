mod env_variable_utils;
mod models;
mod search;
mod utils;

use crate::env_variable_utils::{get_app_name, get_backend_url, is_debug_mode};
use crate::search::SearchPage;
use web_sys::console;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SearchPage />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            get_backend_url(),
            is_debug_mode()
        )
        .into(),
    );
}
