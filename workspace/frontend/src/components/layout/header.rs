use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <Link<Route> to={Route::Home} classes="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-xl">
                        <i class="fas fa-store"></i>
                    </div>
                    <span class="text-xl font-bold tracking-tight">{"Storefront"}</span>
                </Link<Route>>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Products} classes="nav-link"><i class="fas fa-th-large w-5"></i> {"Products"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Search} classes="nav-link"><i class="fas fa-search w-5"></i> {"Search"}</Link<Route>></li>
                </ul>
            </div>
        </div>
    }
}
