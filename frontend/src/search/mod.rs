pub mod api;
pub mod components;

use crate::models::FormattedSearchResult;
use crate::search::api::execute_search;
use crate::search::components::{ResultsList, SearchBar};
use yew::prelude::*;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let query = use_state(String::new);
    let results = use_state(Vec::<FormattedSearchResult>::new);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_search = {
        let query = query.clone();
        let results = results.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        Callback::from(move |new_query: String| {
            if new_query.trim().is_empty() {
                return;
            }
            query.set(new_query.clone());
            loading.set(true);
            error_message.set(None);

            let results = results.clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                execute_search(new_query, results, error_message, loading).await;
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto p-4">
            <h1 class="text-2xl font-bold text-gray-900 mb-4">{ "YouTube Video Search" }</h1>
            <SearchBar query={(*query).clone()} loading={*loading} on_search={on_search} />
            <ResultsList
                results={(*results).clone()}
                loading={*loading}
                error={(*error_message).clone()}
                query={(*query).clone()}
            />
        </div>
    }
}
