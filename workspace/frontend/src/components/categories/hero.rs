use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Full-width gradient banner with a title, a subtitle and optional content below.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="bg-gradient-to-r from-blue-600 to-indigo-700 text-white py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4 animate-fade-in">
                    {&props.title}
                </h1>
                <p class="text-xl mb-8 animate-fade-in">
                    {&props.subtitle}
                </p>
                { for props.children.iter() }
            </div>
        </section>
    }
}
