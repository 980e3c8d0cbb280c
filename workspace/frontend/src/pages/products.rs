use catalog::build_category_list;
use yew::prelude::*;

use crate::common::catalog_context::use_catalog;
use crate::components::categories::{CategoryGrid, Hero};
use crate::components::layout::layout::Layout;
use crate::components::search::SearchForm;

/// Category landing page: hero banner, search box and one card per category.
#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    log::trace!("ProductsPage component rendering");
    let catalog = use_catalog();

    // Derived on every render; the catalog does not change at runtime.
    let categories = build_category_list(&catalog);

    html! {
        <Layout title="Products">
            <Hero
                title="Our Products"
                subtitle="Discover our comprehensive range of high-quality products"
            >
                <SearchForm />
            </Hero>

            <section class="py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <CategoryGrid categories={categories} />
                </div>
            </section>
        </Layout>
    }
}
