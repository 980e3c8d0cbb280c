use catalog::find_category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::catalog_context::use_catalog;
use crate::common::empty_state::EmptyState;
use crate::components::categories::Hero;
use crate::components::layout::layout::Layout;
use crate::components::products::ProductCard;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ProductCategoryPageProps {
    pub slug: String,
}

#[function_component(ProductCategoryPage)]
pub fn product_category_page(props: &ProductCategoryPageProps) -> Html {
    let catalog = use_catalog();

    let spec = match find_category(&props.slug) {
        Ok(spec) => spec,
        Err(e) => {
            log::warn!("{}", e);
            return html! {
                <Layout title="Category not found">
                    <EmptyState
                        icon="fas fa-question-circle"
                        title="Category not found"
                        message={format!("There is no product category called '{}'.", props.slug)}
                    >
                        <Link<Route> to={Route::Products} classes="btn btn-primary btn-sm">
                            {"Back to products"}
                        </Link<Route>>
                    </EmptyState>
                </Layout>
            };
        }
    };

    let products = catalog.products(spec.slug);
    log::debug!("Category '{}' has {} products", spec.slug, products.len());

    html! {
        <Layout title={spec.name}>
            <Hero title={spec.name} subtitle={spec.description} />

            <section class="py-12">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-sm breadcrumbs mb-6">
                        <ul>
                            <li><Link<Route> to={Route::Products}>{"Products"}</Link<Route>></li>
                            <li>{spec.name}</li>
                        </ul>
                    </div>

                    if products.is_empty() {
                        <EmptyState
                            title="No products yet"
                            message="Products for this category will be listed here soon."
                        >
                            <Link<Route> to={Route::Products} classes="btn btn-outline btn-sm">
                                {"Browse other categories"}
                            </Link<Route>>
                        </EmptyState>
                    } else {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for products.iter().map(|product| html! {
                                <ProductCard key={product.id.clone()} product={product.clone()} />
                            })}
                        </div>
                    }
                </div>
            </section>
        </Layout>
    }
}
