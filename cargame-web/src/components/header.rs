use crate::router::{NAVIGATION, Route};
use yew_router::Routable;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Navigation entry to highlight.
    pub active: Option<Route>,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let items = NAVIGATION.iter().map(|route| {
        let is_active = p.active.as_ref() == Some(route);
        let onclick = {
            let cb = p.on_navigate.clone();
            let target = route.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                cb.emit(target.clone());
            })
        };
        html! {
            <li class="nav-item">
                <a
                    class={classes!("nav-link", is_active.then_some("active"))}
                    href={route.to_path()}
                    aria-current={is_active.then_some("page")}
                    {onclick}
                >
                    if let Some(icon) = route.icon() {
                        <><i class={icon} aria-hidden="true"></i>{ " " }</>
                    }
                    { route.name() }
                </a>
            </li>
        }
    });
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <nav class="navbar navbar-expand navbar-dark bg-dark" aria-label="Main">
                <span class="navbar-brand">{ "Car Game" }</span>
                <ul class="navbar-nav">
                    { for items }
                </ul>
            </nav>
        </header>
    }
}
