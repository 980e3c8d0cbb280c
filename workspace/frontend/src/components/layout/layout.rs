use yew::prelude::*;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    {
        let title = props.title.clone();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | Storefront", title));
            }
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <main class="flex-1">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-6 bg-base-200 text-base-content text-sm">
                <p>{"Security, networking and automation solutions"}</p>
            </footer>
        </div>
    }
}
