use catalog::SearchQuery;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::navigation::RouterNavigator;

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    #[prop_or(AttrValue::from("Search products..."))]
    pub placeholder: AttrValue,
}

/// Search box that redirects to the search results route on submit.
#[function_component(SearchForm)]
pub fn search_form(props: &SearchFormProps) -> Html {
    let query = use_state(SearchQuery::default);
    let navigator = use_navigator();

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.set_text(input.value());
            query.set(next);
        })
    };

    let on_submit = {
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(navigator) = navigator.clone() else {
                log::error!("Search form rendered outside a router");
                return;
            };
            let mut next = (*query).clone();
            match next.submit(&RouterNavigator::new(navigator)) {
                Some(path) => {
                    log::info!("Search redirected to {}", path);
                    query.set(next);
                }
                None => log::debug!("Empty search ignored"),
            }
        })
    };

    html! {
        <form class="flex w-full max-w-xl mx-auto gap-2" onsubmit={on_submit} role="search">
            <input
                type="search"
                name="query"
                class="input input-bordered flex-1 text-gray-900"
                placeholder={props.placeholder.clone()}
                value={query.text().to_string()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-search"></i>
                {" Search"}
            </button>
        </form>
    }
}
