use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::empty_state::EmptyState;
use crate::components::layout::layout::Layout;
use crate::pages::product_category::ProductCategoryPage;
use crate::pages::products::ProductsPage;
use crate::pages::search::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:slug")]
    ProductCategory { slug: String },
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Products => {
            log::trace!("Rendering Products page");
            html! { <ProductsPage /> }
        }
        Route::ProductCategory { slug } => {
            log::trace!("Rendering category page for slug: {}", slug);
            html! { <ProductCategoryPage slug={slug} /> }
        }
        Route::Search => {
            log::trace!("Rendering Search page");
            html! { <SearchPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout title="404">
                    <EmptyState
                        icon="fas fa-map-signs"
                        title="404 Not Found"
                        message="The page you are looking for does not exist."
                    >
                        <Link<Route> to={Route::Products} classes="btn btn-primary btn-sm">
                            {"Browse products"}
                        </Link<Route>>
                    </EmptyState>
                </Layout>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CATEGORY_INDEX_PATH, CATEGORY_TABLE, ProductCatalog, SEARCH_PATH, build_category_list, category_path};

    #[test]
    fn test_category_card_routes_match_category_paths() {
        for descriptor in build_category_list(&ProductCatalog::default()) {
            let route = Route::ProductCategory { slug: descriptor.slug.clone() };
            assert_eq!(route.to_path(), category_path(&descriptor.slug));
            assert_eq!(route.to_path(), format!("/products/{}", descriptor.slug));
        }
    }

    #[test]
    fn test_category_paths_resolve_to_category_route() {
        for spec in CATEGORY_TABLE.iter() {
            assert_eq!(
                Route::recognize(&category_path(spec.slug)),
                Some(Route::ProductCategory { slug: spec.slug.to_string() })
            );
        }
    }

    #[test]
    fn test_static_routes_match_shared_paths() {
        assert_eq!(Route::Products.to_path(), CATEGORY_INDEX_PATH);
        assert_eq!(Route::Search.to_path(), SEARCH_PATH);
    }
}
