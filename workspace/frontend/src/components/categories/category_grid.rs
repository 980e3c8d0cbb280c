use catalog::CategoryDescriptor;
use yew::prelude::*;
use super::category_card::CategoryCard;

#[derive(Properties, PartialEq)]
pub struct CategoryGridProps {
    pub categories: Vec<CategoryDescriptor>,
}

#[function_component(CategoryGrid)]
pub fn category_grid(props: &CategoryGridProps) -> Html {
    log::trace!("Rendering {} category cards", props.categories.len());

    html! {
        <div class="grid grid-cols-2 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {for props.categories.iter().enumerate().map(|(index, category)| {
                html! {
                    <CategoryCard key={category.slug.clone()} category={category.clone()} index={index} />
                }
            })}
        </div>
    }
}
