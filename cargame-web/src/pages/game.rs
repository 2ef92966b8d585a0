use cargame_core::{
    CarInGame, CarMoveEventDto, ErrorReporter, GameDto, format_date, parse_game_id,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    pub client: ApiClient,
    /// Raw `:id` path segment.
    pub id: AttrValue,
    pub on_navigate: Callback<Route>,
}

fn parse_coordinate(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

/// Details loaded for `id`; a response for another game is never shown.
fn details_for(game: Option<&GameDto>, id: i64) -> Option<&GameDto> {
    game.filter(|game| game.id.is_none_or(|loaded| loaded == id))
}

fn movement_row(movement: &CarMoveEventDto) -> Html {
    html! {
        <tr>
            <td>{ movement.car_name.clone().unwrap_or_default() }</td>
            <td>{ movement.event_type.map(|t| t.label()).unwrap_or_default() }</td>
            <td>{ format_date(movement.event_time.as_deref()).unwrap_or_default() }</td>
        </tr>
    }
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let errors = use_errors();
    let game = use_state(|| None::<GameDto>);
    let car_name = use_state(String::new);
    let car_x = use_state(|| "1".to_string());
    let car_y = use_state(|| "1".to_string());
    let parsed = parse_game_id(&props.id);

    let reload = {
        let client = props.client.clone();
        let errors = errors.clone();
        let game = game.clone();
        let id = parsed.clone().ok();
        Callback::from(move |()| {
            let Some(id) = id else {
                return;
            };
            let client = client.clone();
            let mut errors = errors.clone();
            let game = game.clone();
            errors.clear();
            spawn_local(async move {
                match client.game_details(id).await {
                    Ok(details) => game.set(Some(details)),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    {
        let reload = reload.clone();
        let game = game.clone();
        use_effect_with(props.id.clone(), move |_| {
            game.set(None);
            reload.emit(());
        });
    }

    let Ok(id) = parsed else {
        return html! {
            <section class="page game-page" data-testid="game-page">
                <h1>{ "Game" }</h1>
                <div class="alert alert-warning" role="alert" data-testid="invalid-game-id">
                    { format!("Invalid game id \"{}\"", props.id) }
                </div>
            </section>
        };
    };

    let on_add_car = {
        let client = props.client.clone();
        let errors = errors.clone();
        let car_name = car_name.clone();
        let car_x = car_x.clone();
        let car_y = car_y.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let mut errors = errors.clone();
            let car_name = car_name.clone();
            let reload = reload.clone();
            let car = CarInGame {
                name: car_name.trim().to_string(),
                x: parse_coordinate(&car_x),
                y: parse_coordinate(&car_y),
            };
            errors.clear();
            spawn_local(async move {
                match client.add_car_to_game(id, &car).await {
                    Ok(()) => {
                        car_name.set(String::new());
                        reload.emit(());
                    }
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let remove_car = {
        let client = props.client.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |name: String| {
            let client = client.clone();
            let mut errors = errors.clone();
            let reload = reload.clone();
            errors.clear();
            spawn_local(async move {
                match client.remove_car_from_game(id, &name).await {
                    Ok(()) => reload.emit(()),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let details = details_for(game.as_ref(), id).map(|game| {
        let running = game.is_running();
        let open_running = {
            let on_navigate = props.on_navigate.clone();
            let route = Route::RunningGame {
                id: id.to_string(),
                name: game.name.clone(),
            };
            Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
        };
        let cars = game.cars.as_deref().unwrap_or_default().iter().map(|car| {
            let on_remove = {
                let remove_car = remove_car.clone();
                let name = car.name.clone();
                Callback::from(move |_: MouseEvent| remove_car.emit(name.clone()))
            };
            html! {
                <li key={car.name.clone()}>
                    <span>{ format!("{} ({})", car.name, car.car_type.label()) }</span>
                    if running {
                        <button type="button" class="btn btn-sm btn-link" onclick={on_remove}>{ "Remove" }</button>
                    }
                </li>
            }
        });
        let movements = game.car_movements.as_deref().unwrap_or_default();
        html! {
            <>
                <dl class="game-details">
                    <dt>{ "Name" }</dt>
                    <dd>{ game.name.clone() }</dd>
                    <dt>{ "Map" }</dt>
                    <dd>{ game.map.as_ref().map(|m| m.name.clone()).unwrap_or_default() }</dd>
                    <dt>{ "Status" }</dt>
                    <dd>{ game.status.map(|s| s.label()).unwrap_or_default() }</dd>
                    <dt>{ "Started" }</dt>
                    <dd>{ format_date(game.started_at.as_deref()).unwrap_or_default() }</dd>
                    <dt>{ "Finished" }</dt>
                    <dd>{ format_date(game.finished_at.as_deref()).unwrap_or_default() }</dd>
                </dl>
                if running {
                    <button type="button" class="btn btn-success" onclick={open_running}>{ "Open running view" }</button>
                }
                <h2>{ "Cars" }</h2>
                <ul class="game-cars">{ for cars }</ul>
                <h2>{ "Movements" }</h2>
                if movements.is_empty() {
                    <p class="empty">{ "No movements recorded." }</p>
                } else {
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{ "Car" }</th>
                                <th>{ "Move" }</th>
                                <th>{ "Time" }</th>
                            </tr>
                        </thead>
                        <tbody>{ for movements.iter().map(movement_row) }</tbody>
                    </table>
                }
            </>
        }
    });

    html! {
        <section class="page game-page" data-testid="game-page">
            <h1>{ format!("Game #{id}") }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            { details.unwrap_or_else(|| html! { <p class="loading">{ "Loading game…" }</p> }) }
            <form class="add-car-to-game form-inline" onsubmit={on_add_car}>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Car name"
                    aria-label="Car name"
                    value={(*car_name).clone()}
                    oninput={super::bind_input(&car_name)}
                />
                <input type="number" min="1" class="form-control" aria-label="X" value={(*car_x).clone()} oninput={super::bind_input(&car_x)} />
                <input type="number" min="1" class="form-control" aria-label="Y" value={(*car_y).clone()} oninput={super::bind_input(&car_y)} />
                <button type="submit" class="btn btn-primary">{ "Add car to game" }</button>
            </form>
        </section>
    }
}
