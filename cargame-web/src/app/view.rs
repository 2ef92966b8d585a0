use yew::prelude::*;
use yew_router::prelude::Redirect;

use crate::api::ApiClient;
use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    about::AboutPage, car_movements::CarMovementsPage, cars::CarsPage, game::GamePage,
    games::GamesPage, maps::MapsPage, not_found::NotFound, running_game::RunningGamePage,
};
use crate::router::Route;

/// Shell around the page for `route`: navigation bar, main area and footer.
pub fn render_app(client: &ApiClient, route: &Route, on_navigate: &Callback<Route>) -> Html {
    html! {
        <>
            <Header active={Some(route.section())} on_navigate={on_navigate.clone()} />
            <main id="main" role="main" class="container">
                { render_route(client, route, on_navigate) }
            </main>
            <Footer />
        </>
    }
}

/// Page shown for `route`. Redirecting routes render a [`Redirect`] and
/// therefore need a surrounding router.
pub fn render_route(client: &ApiClient, route: &Route, on_navigate: &Callback<Route>) -> Html {
    if let Some(target) = route.redirect() {
        return html! { <Redirect<Route> to={target} /> };
    }
    let client = client.clone();
    let on_navigate = on_navigate.clone();
    match route {
        Route::Maps => html! { <MapsPage {client} {on_navigate} /> },
        Route::Cars => html! { <CarsPage {client} /> },
        Route::Games => html! { <GamesPage {client} {on_navigate} /> },
        Route::Game { id } => html! {
            <GamePage {client} id={AttrValue::from(id.clone())} {on_navigate} />
        },
        Route::CarMovements => html! { <CarMovementsPage {client} /> },
        Route::RunningGame { id, name } => html! {
            <RunningGamePage
                {client}
                id={AttrValue::from(id.clone())}
                name={AttrValue::from(name.clone())}
                {on_navigate}
            />
        },
        Route::About => html! { <AboutPage /> },
        Route::Root | Route::NotFound => {
            let on_go_home = on_navigate.reform(|()| Route::Maps);
            html! { <NotFound {on_go_home} /> }
        }
    }
}
