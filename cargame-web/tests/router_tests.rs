use cargame_web::router::{NAVIGATION, Route};
use yew_router::Routable;

#[test]
fn listing_paths_are_recognized() {
    assert_eq!(Route::recognize("/maps"), Some(Route::Maps));
    assert_eq!(Route::recognize("/cars"), Some(Route::Cars));
    assert_eq!(Route::recognize("/games"), Some(Route::Games));
    assert_eq!(Route::recognize("/carMovements"), Some(Route::CarMovements));
    assert_eq!(Route::recognize("/about"), Some(Route::About));
}

#[test]
fn parameterized_paths_capture_segments() {
    assert_eq!(
        Route::recognize("/games/42"),
        Some(Route::Game { id: "42".into() })
    );
    assert_eq!(
        Route::recognize("/run/7/alpha"),
        Some(Route::RunningGame {
            id: "7".into(),
            name: "alpha".into()
        })
    );
}

#[test]
fn malformed_ids_still_reach_the_page() {
    assert_eq!(
        Route::recognize("/games/abc"),
        Some(Route::Game { id: "abc".into() })
    );
}

#[test]
fn root_resolves_to_maps() {
    let root = Route::recognize("/").expect("root route");
    assert_eq!(root, Route::Root);
    assert_eq!(root.resolve(), Route::Maps);
}

#[test]
fn unknown_paths_fall_back_to_not_found() {
    assert_eq!(Route::recognize("/garage"), Some(Route::NotFound));
    assert_eq!(Route::recognize("/run/7"), Some(Route::NotFound));
}

#[test]
fn paths_round_trip_for_navigation() {
    for route in NAVIGATION {
        assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()));
    }
    assert_eq!(
        Route::RunningGame {
            id: "3".into(),
            name: "oval".into()
        }
        .to_path(),
        "/run/3/oval"
    );
}
