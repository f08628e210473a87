#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;

use crate::config::{create_app_state, create_cors, init_logger, load_environment};
use crate::services::results_store::ResultsStore;

pub struct AppState {
    pub store: ResultsStore,
}

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let state = create_app_state();
    let cors = create_cors().expect("Failed to create CORS options");

    rocket::build()
        .manage(state)
        .mount("/search", routes![api::search_videos])
        .attach(cors)
}
