use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let query = use_state(String::new);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="search-page" data-view="search">
            <div class="search-bar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search"
                    autofocus={true}
                    value={(*query).clone()}
                    oninput={on_input}
                />
                <Link<Route> classes={classes!("btn-settings")} to={Route::Settings}>
                    {"⚙️"}
                </Link<Route>>
            </div>
            <div class="search-results"></div>
        </div>
    }
}
