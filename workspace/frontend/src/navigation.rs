use std::borrow::Cow;

use catalog::Navigate;
use yew_router::prelude::*;

use crate::router::Route;

/// Routes `Navigate` requests through the router's `Navigator`, so the
/// `BrowserRouter` re-renders without a page reload.
#[derive(Clone)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str) {
        let (pathname, query) = split_path(path);
        let route = match Route::recognize(pathname) {
            Some(route) => route,
            None => {
                log::warn!("No route for {}", path);
                return;
            }
        };

        log::debug!("Navigating to {:?} with query {:?}", route, query);
        if query.is_empty() {
            self.navigator.push(&route);
        } else if let Err(e) = self.navigator.push_with_query(&route, &query) {
            log::error!("Failed to navigate to {}: {}", path, e);
        }
    }
}

/// Split `/search?query=fiber%20splicer` into the pathname and its decoded
/// query pairs.
fn split_path(path: &str) -> (&str, Vec<(String, String)>) {
    let Some((pathname, query)) = path.split_once('?') else {
        return (path, Vec::new());
    };

    let pairs = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect();
    (pathname, pairs)
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
