use catalog::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Optional line shown above the name, e.g. the category on search results
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <div class="card bg-base-100 shadow-md hover:shadow-lg transition-shadow">
            if let Some(image) = &product.image {
                <figure>
                    <img src={image.clone()} alt={product.name.clone()} class="w-full h-40 object-cover" />
                </figure>
            }
            <div class="card-body">
                if let Some(caption) = &props.caption {
                    <div class="badge badge-sm badge-ghost">{caption}</div>
                }
                <h3 class="card-title text-lg">{&product.name}</h3>
                <p class="text-sm text-gray-600">{&product.description}</p>
                if !product.features.is_empty() {
                    <ul class="mt-2 flex flex-wrap gap-2">
                        {for product.features.iter().map(|feature| html! {
                            <li class="badge badge-outline badge-sm">{feature}</li>
                        })}
                    </ul>
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}
