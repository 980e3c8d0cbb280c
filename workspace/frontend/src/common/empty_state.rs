use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or(AttrValue::from("fas fa-box-open"))]
    pub icon: AttrValue,
    /// Optional actions rendered under the message
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-4 text-center">
            <i class={format!("{} text-5xl text-gray-400", props.icon)}></i>
            <h2 class="text-2xl font-semibold text-gray-800">{&props.title}</h2>
            if let Some(message) = &props.message {
                <p class="text-gray-500 max-w-md">{message}</p>
            }
            { for props.children.iter() }
        </div>
    }
}
