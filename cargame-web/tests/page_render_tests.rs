use cargame_core::ApiConfig;
use cargame_web::api::ApiClient;
use cargame_web::app::view::render_route;
use cargame_web::components::error_alerts::{ErrorAlerts, Props as ErrorAlertsProps};
use cargame_web::components::header::{Header, Props as HeaderProps};
use cargame_web::pages::{
    about::AboutPage,
    car_movements::{CarMovementsPage, CarMovementsPageProps},
    cars::{CarsPage, CarsPageProps},
    game::{GamePage, GamePageProps},
    games::{GamesPage, GamesPageProps},
    maps::{MapsPage, MapsPageProps},
    not_found::{NotFound, Props as NotFoundProps},
    running_game::{RunningGamePage, RunningGamePageProps},
};
use cargame_web::router::Route;
use futures::executor::block_on;
use yew::{Callback, Html, LocalServerRenderer, Properties, function_component};

fn client() -> ApiClient {
    ApiClient::new(ApiConfig::new("http://localhost:8080").expect("valid base url"))
}

#[test]
fn maps_page_renders_upload_form_and_empty_list() {
    let props = MapsPageProps {
        client: client(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MapsPage>::with_props(props).render());
    assert!(html.contains("data-testid=\"maps-page\""));
    assert!(html.contains("Upload map"));
    assert!(html.contains("No maps available."));
    assert!(!html.contains("error-alerts"));
}

#[test]
fn cars_page_offers_selectable_types() {
    let html = block_on(
        LocalServerRenderer::<CarsPage>::with_props(CarsPageProps { client: client() }).render(),
    );
    assert!(html.contains("RACER"));
    assert!(html.contains("MONSTER_TRUCK"));
    assert!(!html.contains("UNKNOWN"));
    assert!(html.contains("No cars yet."));
}

#[test]
fn games_page_lists_status_filters() {
    let props = GamesPageProps {
        client: client(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesPage>::with_props(props).render());
    assert!(html.contains("All games"));
    assert!(html.contains("value=\"RUNNING\""));
    assert!(html.contains("value=\"COMPLETED\""));
    assert!(html.contains("Start game"));
}

#[test]
fn game_page_rejects_malformed_id() {
    let props = GamePageProps {
        client: client(),
        id: "abc".into(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("invalid-game-id"));
    assert!(html.contains("abc"));
    assert!(!html.contains("Add car to game"));
}

#[test]
fn game_page_with_valid_id_shows_form() {
    let props = GamePageProps {
        client: client(),
        id: "12".into(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("Game #12"));
    assert!(html.contains("Add car to game"));
    assert!(!html.contains("invalid-game-id"));
}

#[test]
fn running_game_page_shows_name_and_refresh() {
    let props = RunningGamePageProps {
        client: client(),
        id: "7".into(),
        name: "alpha".into(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RunningGamePage>::with_props(props).render());
    assert!(html.contains("alpha #7"));
    assert!(html.contains("Refresh"));
    assert!(html.contains("No cars in this game yet."));
}

#[test]
fn running_game_page_rejects_zero_id() {
    let props = RunningGamePageProps {
        client: client(),
        id: "0".into(),
        name: "alpha".into(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RunningGamePage>::with_props(props).render());
    assert!(html.contains("invalid-game-id"));
    assert!(!html.contains("Refresh"));
}

#[test]
fn car_movements_page_explains_filter_rule() {
    let html = block_on(
        LocalServerRenderer::<CarMovementsPage>::with_props(CarMovementsPageProps {
            client: client(),
        })
        .render(),
    );
    assert!(html.contains("Fill in one filter, or all of them."));
    assert!(html.contains("Movements limit"));
    assert!(!html.contains("<table"));
}

#[test]
fn about_and_not_found_render() {
    let about = block_on(LocalServerRenderer::<AboutPage>::new().render());
    assert!(about.contains("data-testid=\"about-page\""));

    let missing = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(missing.contains("Page not found"));
    assert!(missing.contains("Back to maps"));
}

#[test]
fn error_alerts_render_messages_in_order() {
    let html = block_on(
        LocalServerRenderer::<ErrorAlerts>::with_props(ErrorAlertsProps {
            messages: vec!["first".into(), "Internal error!".into(), "first".into()],
        })
        .render(),
    );
    let first = html.find("first").expect("first message");
    let fallback = html.find("Internal error!").expect("fallback message");
    assert!(first < fallback);
    assert_eq!(html.matches("<li>").count(), 3);

    let empty = block_on(
        LocalServerRenderer::<ErrorAlerts>::with_props(ErrorAlertsProps { messages: vec![] })
            .render(),
    );
    assert!(!empty.contains("role=\"alert\""));
}

#[test]
fn header_marks_active_section() {
    let html = block_on(
        LocalServerRenderer::<Header>::with_props(HeaderProps {
            active: Some(Route::Games),
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("href=\"/games\""));
    assert!(html.contains("aria-current=\"page\""));
    assert_eq!(html.matches("aria-current").count(), 1);
    assert!(html.contains("fas fa-flag"));
}

#[derive(Properties, PartialEq)]
struct RouteHostProps {
    route: Route,
}

#[function_component(RouteHost)]
fn route_host(props: &RouteHostProps) -> Html {
    render_route(&client(), &props.route, &Callback::noop())
}

#[test]
fn routes_render_their_pages() {
    let cases = [
        (Route::Maps, "maps-page"),
        (Route::Cars, "cars-page"),
        (Route::Games, "games-page"),
        (Route::Game { id: "5".into() }, "game-page"),
        (Route::CarMovements, "car-movements-page"),
        (
            Route::RunningGame {
                id: "5".into(),
                name: "oval".into(),
            },
            "running-game-page",
        ),
        (Route::About, "about-page"),
        (Route::NotFound, "not-found-page"),
    ];
    for (route, marker) in cases {
        let html = block_on(
            LocalServerRenderer::<RouteHost>::with_props(RouteHostProps {
                route: route.clone(),
            })
            .render(),
        );
        assert!(
            html.contains(&format!("data-testid=\"{marker}\"")),
            "{route:?} should render {marker}"
        );
    }
}
