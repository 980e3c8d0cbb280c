use std::rc::Rc;

use catalog::ProductCatalog;
use yew::prelude::*;

/// Read-only handle to the product catalog shared by every page.
#[derive(Clone, PartialEq)]
pub struct CatalogContext {
    pub catalog: Rc<ProductCatalog>,
}

#[derive(Properties, PartialEq)]
pub struct CatalogProviderProps {
    pub children: Children,
}

fn load_catalog() -> ProductCatalog {
    match ProductCatalog::builtin() {
        Ok(catalog) => {
            log::info!("Loaded catalog with {} categories", catalog.slugs().count());
            catalog
        }
        Err(e) => {
            // Every category then reads as empty.
            log::error!("Failed to load bundled catalog: {}", e);
            ProductCatalog::default()
        }
    }
}

#[function_component(CatalogProvider)]
pub fn catalog_provider(props: &CatalogProviderProps) -> Html {
    let catalog = use_memo((), |_| load_catalog());

    let context = CatalogContext { catalog };

    html! {
        <ContextProvider<CatalogContext> context={context}>
            {props.children.clone()}
        </ContextProvider<CatalogContext>>
    }
}

/// The catalog from the nearest `CatalogProvider`, or an empty one outside it.
#[hook]
pub fn use_catalog() -> Rc<ProductCatalog> {
    match use_context::<CatalogContext>() {
        Some(context) => context.catalog,
        None => {
            log::warn!("use_catalog called outside CatalogProvider");
            Rc::new(ProductCatalog::default())
        }
    }
}
