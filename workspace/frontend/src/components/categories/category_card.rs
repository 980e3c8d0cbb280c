use catalog::CategoryDescriptor;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub category: CategoryDescriptor,
    /// Position in the grid, used to stagger the entry animation
    #[prop_or_default]
    pub index: usize,
}

#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let category = &props.category;
    let route = Route::ProductCategory { slug: category.slug.clone() };
    let delay = format!("animation-delay: {:.1}s", props.index as f64 * 0.1);

    html! {
        <Link<Route>
            to={route}
            classes="block bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-2xl transition-all duration-300 hover:scale-105 cursor-pointer group animate-scale-in"
        >
            <div style={delay}>
                <div class="relative overflow-hidden">
                    <img
                        src={category.image.clone()}
                        alt={category.name.clone()}
                        class="w-full h-32 sm:h-48 object-cover group-hover:scale-110 transition-transform duration-300"
                    />
                    <div class="absolute top-2 right-2 sm:top-4 sm:right-4 bg-blue-600 text-white px-2 py-0.5 sm:px-3 sm:py-1 rounded-full text-xs sm:text-sm font-semibold">
                        {&category.item_count}
                    </div>
                </div>
                <div class="p-3 sm:p-6">
                    <h3 class="text-base sm:text-xl font-bold text-gray-900 mb-1 sm:mb-2">
                        {&category.name}
                    </h3>
                    <p class="text-xs sm:text-gray-600 sm:text-base">
                        {&category.description}
                    </p>
                </div>
            </div>
        </Link<Route>>
    }
}
