use cargame_core::{ApiError, CarMoveEventDto, CarMovementsFilter, ErrorReporter, format_date};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;

#[derive(Properties, PartialEq, Clone)]
pub struct CarMovementsPageProps {
    pub client: ApiClient,
}

#[function_component(CarMovementsPage)]
pub fn car_movements_page(props: &CarMovementsPageProps) -> Html {
    let errors = use_errors();
    let movements = use_state(|| None::<Vec<CarMoveEventDto>>);
    let game_ids = use_state(String::new);
    let map_names = use_state(String::new);
    let car_names = use_state(String::new);
    let limit = use_state(String::new);

    let on_search = {
        let client = props.client.clone();
        let errors = errors.clone();
        let movements = movements.clone();
        let game_ids = game_ids.clone();
        let map_names = map_names.clone();
        let car_names = car_names.clone();
        let limit = limit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut errors = errors.clone();
            errors.clear();
            let filter = match CarMovementsFilter::from_inputs(&game_ids, &map_names, &car_names, &limit) {
                Ok(filter) => filter,
                Err(err) => {
                    errors.add_from_error(&ApiError::from(err));
                    return;
                }
            };
            let client = client.clone();
            let movements = movements.clone();
            spawn_local(async move {
                match client.car_movements(&filter).await {
                    Ok(found) => movements.set(Some(found)),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let results = match movements.as_deref() {
        None => html! {},
        Some([]) => html! { <p class="empty">{ "No movements match the filter." }</p> },
        Some(found) => html! {
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{ "Game" }</th>
                        <th>{ "Car" }</th>
                        <th>{ "Type" }</th>
                        <th>{ "Move" }</th>
                        <th>{ "Time" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for found.iter().map(|movement| html! {
                        <tr>
                            <td>{ movement.game_name.clone().unwrap_or_default() }</td>
                            <td>{ movement.car_name.clone().unwrap_or_default() }</td>
                            <td>{ movement.car_type.clone().unwrap_or_default() }</td>
                            <td>{ movement.event_type.map(|t| t.label()).unwrap_or_default() }</td>
                            <td>{ format_date(movement.event_time.as_deref()).unwrap_or_default() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="page car-movements-page" data-testid="car-movements-page">
            <h1>{ "Car Movements" }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            <form class="movements-filter" onsubmit={on_search}>
                <p class="hint">{ "Fill in one filter, or all of them. Separate several values with commas." }</p>
                <input type="text" class="form-control" placeholder="Game ids" aria-label="Game ids"
                    value={(*game_ids).clone()} oninput={super::bind_input(&game_ids)} />
                <input type="text" class="form-control" placeholder="Map names" aria-label="Map names"
                    value={(*map_names).clone()} oninput={super::bind_input(&map_names)} />
                <input type="text" class="form-control" placeholder="Car names" aria-label="Car names"
                    value={(*car_names).clone()} oninput={super::bind_input(&car_names)} />
                <input type="number" min="1" class="form-control" placeholder="Movements limit" aria-label="Movements limit"
                    value={(*limit).clone()} oninput={super::bind_input(&limit)} />
                <button type="submit" class="btn btn-primary">{ "Search" }</button>
            </form>
            { results }
        </section>
    }
}
