use cargame_core::{CarCommand, CarDto, ErrorReporter, parse_game_id};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct RunningGamePageProps {
    pub client: ApiClient,
    pub id: AttrValue,
    pub name: AttrValue,
    pub on_navigate: Callback<Route>,
}

#[derive(Properties, PartialEq)]
struct CarControlsProps {
    car: CarDto,
    game_id: i64,
    on_command: Callback<(String, CarCommand)>,
}

#[function_component(CarControls)]
fn car_controls(props: &CarControlsProps) -> Html {
    let moves = use_state(|| "1".to_string());
    let send = |command: CarCommand| {
        let on_command = props.on_command.clone();
        let name = props.car.name.clone();
        Callback::from(move |_: MouseEvent| on_command.emit((name.clone(), command)))
    };
    let back = {
        let on_command = props.on_command.clone();
        let name = props.car.name.clone();
        let moves = moves.clone();
        let game_id = props.game_id;
        Callback::from(move |_: MouseEvent| {
            let moves = moves.trim().parse().unwrap_or(0);
            on_command.emit((name.clone(), CarCommand::Back { game_id, moves }));
        })
    };
    let disabled = props.car.is_crashed();
    let status = props.car.current_status.as_ref();

    html! {
        <tr class={classes!(disabled.then_some("table-danger"))}>
            <td>{ props.car.name.clone() }</td>
            <td>{ props.car.car_type.label() }</td>
            <td>{ status.map(|s| format!("({}, {})", s.x, s.y)).unwrap_or_default() }</td>
            <td>{ status.and_then(|s| s.direction).map(|d| d.arrow()).unwrap_or_default() }</td>
            <td class="controls">
                <button type="button" class="btn btn-sm btn-primary" {disabled} onclick={send(CarCommand::Forward { distance: 1 })}>{ "Forward 1" }</button>
                <button type="button" class="btn btn-sm btn-primary" {disabled} onclick={send(CarCommand::Forward { distance: 2 })}>{ "Forward 2" }</button>
                <button type="button" class="btn btn-sm btn-secondary" {disabled} onclick={send(CarCommand::TurnLeft)}>{ "Left" }</button>
                <button type="button" class="btn btn-sm btn-secondary" {disabled} onclick={send(CarCommand::TurnRight)}>{ "Right" }</button>
                <input type="number" min="1" class="form-control form-control-sm moves" aria-label="Moves to undo"
                    value={(*moves).clone()} oninput={super::bind_input(&moves)} />
                <button type="button" class="btn btn-sm btn-warning" onclick={back}>{ "Back" }</button>
            </td>
        </tr>
    }
}

/// Cars of a running game, tagged with the game id they were loaded for.
type LoadedCars = (i64, Vec<CarDto>);

fn cars_for(loaded: Option<&LoadedCars>, id: i64) -> &[CarDto] {
    match loaded {
        Some((loaded_id, cars)) if *loaded_id == id => cars.as_slice(),
        _ => &[],
    }
}

#[function_component(RunningGamePage)]
pub fn running_game_page(props: &RunningGamePageProps) -> Html {
    let errors = use_errors();
    let loaded = use_state(|| None::<LoadedCars>);
    let parsed = parse_game_id(&props.id);

    let reload = {
        let client = props.client.clone();
        let errors = errors.clone();
        let loaded = loaded.clone();
        let id = parsed.clone().ok();
        Callback::from(move |()| {
            let Some(id) = id else {
                return;
            };
            let client = client.clone();
            let mut errors = errors.clone();
            let loaded = loaded.clone();
            errors.clear();
            spawn_local(async move {
                match client.running_game(id).await {
                    Ok(running) => loaded.set(Some((id, running.cars))),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    {
        let reload = reload.clone();
        let loaded = loaded.clone();
        use_effect_with(props.id.clone(), move |_| {
            loaded.set(None);
            reload.emit(());
        });
    }

    let on_command = {
        let client = props.client.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |(name, command): (String, CarCommand)| {
            let client = client.clone();
            let mut errors = errors.clone();
            let reload = reload.clone();
            errors.clear();
            spawn_local(async move {
                let outcome = client.command_car(&name, command).await;
                if errors.report(outcome).is_some() {
                    log::debug!("{name}: {}", command.action());
                    reload.emit(());
                }
            });
        })
    };

    let Ok(id) = parsed else {
        return html! {
            <section class="page running-game-page" data-testid="running-game-page">
                <h1>{ props.name.clone() }</h1>
                <div class="alert alert-warning" role="alert" data-testid="invalid-game-id">
                    { format!("Invalid game id \"{}\"", props.id) }
                </div>
            </section>
        };
    };

    let cars = cars_for(loaded.as_ref(), id);
    let on_refresh = reload.reform(|_: MouseEvent| ());
    let on_details = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Game { id: id.to_string() }))
    };

    html! {
        <section class="page running-game-page" data-testid="running-game-page">
            <h1>{ format!("{} #{id}", props.name) }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            <div class="toolbar">
                <button type="button" class="btn btn-secondary" onclick={on_refresh}>{ "Refresh" }</button>
                <button type="button" class="btn btn-link" onclick={on_details}>{ "Game details" }</button>
            </div>
            if cars.is_empty() {
                <p class="empty">{ "No cars in this game yet." }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Car" }</th>
                            <th>{ "Type" }</th>
                            <th>{ "Position" }</th>
                            <th>{ "Heading" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for cars.iter().map(|car| html! {
                            <CarControls key={car.name.clone()} car={car.clone()} game_id={id} on_command={on_command.clone()} />
                        }) }
                    </tbody>
                </table>
            }
        </section>
    }
}
