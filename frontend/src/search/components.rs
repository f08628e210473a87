use crate::models::FormattedSearchResult;
use crate::utils::format_number;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search YouTube videos..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub result: FormattedSearchResult,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let result = &props.result;
    html! {
        <div class="flex gap-4 p-4 bg-white rounded-lg shadow">
            <div class="flex-shrink-0">
                <a href={result.video_url.clone()} target="_blank" rel="noopener noreferrer">
                    <img src={result.thumbnail.clone()} alt={result.title.clone()} class="w-48 rounded" />
                </a>
            </div>
            <div class="flex-grow">
                <h2 class="text-lg font-semibold">
                    <a href={result.video_url.clone()}
                       target="_blank"
                       rel="noopener noreferrer"
                       class="text-blue-600 hover:underline">
                        { &result.title }
                    </a>
                </h2>
                <p class="text-sm text-gray-600">{ format!("Channel: {}", result.channel) }</p>
                <p class="text-sm text-gray-600">{ format!("Views: {}", format_number(result.views)) }</p>
                <p class="text-sm text-gray-600">{ format!("Duration: {}", result.duration) }</p>
                {
                    if result.chapters.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="mt-2">
                                <p class="text-sm font-medium text-gray-800">{ "Chapters:" }</p>
                                <ul class="text-sm text-gray-700">
                                    { for result.chapters.iter().map(|chapter| html! {
                                        <li>{ chapter }</li>
                                    }) }
                                </ul>
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsListProps {
    pub results: Vec<FormattedSearchResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
}

#[function_component(ResultsList)]
pub fn results_list(props: &ResultsListProps) -> Html {
    if props.loading {
        return html! {
            <p class="text-gray-500">{ "Searching..." }</p>
        };
    }

    if let Some(error) = &props.error {
        return html! {
            <div class="p-4 bg-red-100 text-red-800 rounded-lg">
                { error }
            </div>
        };
    }

    if props.results.is_empty() {
        if props.query.is_empty() {
            return html! {};
        }
        return html! {
            <p class="text-gray-500">{ format!("No results for \"{}\"", props.query) }</p>
        };
    }

    html! {
        <div class="flex flex-col gap-4">
            { for props.results.iter().map(|result| html! {
                <VideoCard result={result.clone()} />
            }) }
        </div>
    }
}
