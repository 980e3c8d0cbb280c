use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::catalog_context::use_catalog;
use crate::common::empty_state::EmptyState;
use crate::components::categories::Hero;
use crate::components::layout::layout::Layout;
use crate::components::products::ProductCard;
use crate::components::search::SearchForm;
use crate::router::Route;

/// Query string of the search route, `?query=...`.
#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let catalog = use_catalog();
    let location = use_location();

    let query = location
        .and_then(|location| match location.query::<SearchParams>() {
            Ok(params) => Some(params.query),
            Err(e) => {
                log::warn!("Failed to read search query: {}", e);
                None
            }
        })
        .unwrap_or_default();
    let query = query.trim().to_string();

    let hits = catalog.search(&query);
    log::debug!("Search page for '{}' shows {} hits", query, hits.len());

    let results = if query.is_empty() {
        html! {
            <EmptyState
                icon="fas fa-search"
                title="Search our catalog"
                message="Type a product name or keyword above."
            />
        }
    } else if hits.is_empty() {
        html! {
            <EmptyState
                icon="fas fa-search-minus"
                title="No matching products"
                message={format!("Nothing matched '{}'. Try a different keyword.", query)}
            >
                <Link<Route> to={Route::Products} classes="btn btn-outline btn-sm">
                    {"Browse all categories"}
                </Link<Route>>
            </EmptyState>
        }
    } else {
        html! {
            <>
                <p class="mb-6 text-gray-600">
                    {format!("{} result(s) for '{}'", hits.len(), query)}
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for hits.into_iter().map(|hit| {
                        let key = format!("{}/{}", hit.category_slug, hit.product.id);
                        let route = Route::ProductCategory { slug: hit.category_slug.clone() };
                        html! {
                            <ProductCard
                                key={key}
                                product={hit.product}
                                caption={AttrValue::from(hit.category_name)}
                            >
                                <div class="card-actions justify-end">
                                    <Link<Route> to={route} classes="btn btn-primary btn-sm">
                                        {"View category"}
                                    </Link<Route>>
                                </div>
                            </ProductCard>
                        }
                    })}
                </div>
            </>
        }
    };

    html! {
        <Layout title="Search">
            <Hero title="Search Products" subtitle="Find cameras, network gear, software and more">
                <SearchForm />
            </Hero>

            <section class="py-12">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    {results}
                </div>
            </section>
        </Layout>
    }
}
