#[cfg(target_arch = "wasm32")]
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

use crate::api::ApiClient;

pub mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub client: ApiClient,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner client={props.client.clone()} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner(props: &AppProps) -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_navigate = Callback::from(move |target: Route| {
        log::debug!("Navigating to {}", target.to_path());
        match &navigator {
            Some(navigator) => navigator.push(&target),
            None => log::warn!("No router available to open {}", target.to_path()),
        }
    });

    view::render_app(&props.client, &route, &on_navigate)
}
