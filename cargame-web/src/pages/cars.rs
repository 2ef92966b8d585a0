use cargame_core::{CarDto, CarType, ErrorReporter, NewCar};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;

#[derive(Properties, PartialEq, Clone)]
pub struct CarsPageProps {
    pub client: ApiClient,
}

fn position(car: &CarDto) -> String {
    car.current_status.as_ref().map_or_else(String::new, |status| {
        let arrow = status.direction.map(|d| d.arrow()).unwrap_or_default();
        format!("({}, {}) {arrow}", status.x, status.y)
    })
}

fn condition(car: &CarDto) -> &'static str {
    if car.is_crashed() {
        "Crashed"
    } else if car.is_in_game() {
        "In game"
    } else {
        "Idle"
    }
}

#[function_component(CarsPage)]
pub fn cars_page(props: &CarsPageProps) -> Html {
    let errors = use_errors();
    let cars = use_state(Vec::<CarDto>::new);
    let loading = use_state(|| false);
    let car_name = use_state(String::new);
    let car_type = use_state(CarType::default);

    let reload = {
        let client = props.client.clone();
        let errors = errors.clone();
        let cars = cars.clone();
        let loading = loading.clone();
        Callback::from(move |()| {
            let client = client.clone();
            let mut errors = errors.clone();
            let cars = cars.clone();
            let loading = loading.clone();
            errors.clear();
            loading.set(true);
            spawn_local(async move {
                match client.list_cars().await {
                    Ok(list) => cars.set(list),
                    Err(err) => errors.add_from_error(&err),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |()| reload.emit(()));
    }

    let on_add = {
        let client = props.client.clone();
        let errors = errors.clone();
        let car_name = car_name.clone();
        let car_type = car_type.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let mut errors = errors.clone();
            let car_name = car_name.clone();
            let reload = reload.clone();
            let car = NewCar {
                name: car_name.trim().to_string(),
                car_type: *car_type,
            };
            errors.clear();
            spawn_local(async move {
                match client.add_car(&car).await {
                    Ok(created) => {
                        log::info!("Added car {}", created.name);
                        car_name.set(String::new());
                        reload.emit(());
                    }
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let on_type = {
        let car_type = car_type.clone();
        Callback::from(move |e: Event| car_type.set(CarType::from_wire(&super::select_value(&e))))
    };

    let repair = {
        let client = props.client.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |name: String| {
            let client = client.clone();
            let mut errors = errors.clone();
            let reload = reload.clone();
            errors.clear();
            spawn_local(async move {
                match client.repair_car(&name).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let remove = {
        let client = props.client.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |name: String| {
            let client = client.clone();
            let mut errors = errors.clone();
            let reload = reload.clone();
            errors.clear();
            spawn_local(async move {
                match client.delete_car(&name).await {
                    Ok(()) => reload.emit(()),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let rows = cars.iter().map(|car| {
        let on_repair = {
            let repair = repair.clone();
            let name = car.name.clone();
            Callback::from(move |_: MouseEvent| repair.emit(name.clone()))
        };
        let on_delete = {
            let remove = remove.clone();
            let name = car.name.clone();
            Callback::from(move |_: MouseEvent| remove.emit(name.clone()))
        };
        html! {
            <tr key={car.name.clone()} class={classes!(car.is_crashed().then_some("table-danger"))}>
                <td>{ car.name.clone() }</td>
                <td>{ car.car_type.label() }</td>
                <td>{ condition(car) }</td>
                <td>{ position(car) }</td>
                <td class="actions">
                    <button type="button" class="btn btn-sm btn-warning" disabled={!car.is_crashed()} onclick={on_repair}>
                        { "Repair" }
                    </button>
                    <button type="button" class="btn btn-sm btn-danger" disabled={car.is_in_game()} onclick={on_delete}>
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="page cars-page" data-testid="cars-page">
            <h1>{ "Cars" }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            <form class="add-car form-inline" onsubmit={on_add}>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Car name"
                    aria-label="Car name"
                    value={(*car_name).clone()}
                    oninput={super::bind_input(&car_name)}
                />
                <select class="form-control" aria-label="Car type" onchange={on_type}>
                    { for CarType::SELECTABLE.iter().map(|kind| html! {
                        <option value={kind.as_wire()} selected={*kind == *car_type}>{ kind.label() }</option>
                    }) }
                </select>
                <button type="submit" class="btn btn-primary">{ "Add car" }</button>
            </form>
            if *loading {
                <p class="loading">{ "Loading cars…" }</p>
            } else if cars.is_empty() {
                <p class="empty">{ "No cars yet." }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Type" }</th>
                            <th>{ "Condition" }</th>
                            <th>{ "Position" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </section>
    }
}
