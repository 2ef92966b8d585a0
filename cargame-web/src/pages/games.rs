use cargame_core::{ErrorReporter, GameDto, GameStatusFilter, format_date};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct GamesPageProps {
    pub client: ApiClient,
    pub on_navigate: Callback<Route>,
}

const STATUS_OPTIONS: [(Option<GameStatusFilter>, &str); 3] = [
    (None, "All games"),
    (Some(GameStatusFilter::Running), "Running"),
    (Some(GameStatusFilter::Completed), "Completed"),
];

#[function_component(GamesPage)]
pub fn games_page(props: &GamesPageProps) -> Html {
    let errors = use_errors();
    let games = use_state(Vec::<GameDto>::new);
    let loading = use_state(|| false);
    let status = use_state(|| None::<GameStatusFilter>);
    let map_name = use_state(String::new);

    {
        let client = props.client.clone();
        let errors = errors.clone();
        let games = games.clone();
        let loading = loading.clone();
        use_effect_with(*status, move |status| {
            let status = *status;
            let mut errors = errors.clone();
            errors.clear();
            loading.set(true);
            spawn_local(async move {
                match client.list_games(status).await {
                    Ok(list) => games.set(list),
                    Err(err) => errors.add_from_error(&err),
                }
                loading.set(false);
            });
        });
    }

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            status.set(GameStatusFilter::from_query(&super::select_value(&e)));
        })
    };

    let on_start = {
        let client = props.client.clone();
        let errors = errors.clone();
        let map_name = map_name.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let mut errors = errors.clone();
            let name = (*map_name).clone();
            let on_navigate = on_navigate.clone();
            errors.clear();
            spawn_local(async move {
                match client.start_game(&name).await {
                    Ok(game) => on_navigate.emit(match game.id {
                        Some(id) => Route::Game { id: id.to_string() },
                        None => Route::Games,
                    }),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let rows = games.iter().map(|game| {
        let id = game.id.map(|id| id.to_string()).unwrap_or_default();
        let open = {
            let on_navigate = props.on_navigate.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Game { id: id.clone() }))
        };
        let run = {
            let on_navigate = props.on_navigate.clone();
            let route = Route::RunningGame {
                id: id.clone(),
                name: game.name.clone(),
            };
            Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
        };
        html! {
            <tr key={format!("{id}-{}", game.name)}>
                <td>{ id.clone() }</td>
                <td>{ game.name.clone() }</td>
                <td>{ game.status.map(|s| s.label()).unwrap_or_default() }</td>
                <td>{ format_date(game.started_at.as_deref()).unwrap_or_default() }</td>
                <td>{ format_date(game.finished_at.as_deref()).unwrap_or_default() }</td>
                <td class="actions">
                    <button type="button" class="btn btn-sm btn-secondary" disabled={id.is_empty()} onclick={open}>
                        { "Open" }
                    </button>
                    if game.is_running() {
                        <button type="button" class="btn btn-sm btn-success" onclick={run}>{ "Run" }</button>
                    }
                </td>
            </tr>
        }
    });

    html! {
        <section class="page games-page" data-testid="games-page">
            <h1>{ "Games" }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            <div class="toolbar form-inline">
                <select class="form-control" aria-label="Game status" onchange={on_status}>
                    { for STATUS_OPTIONS.iter().map(|(value, label)| html! {
                        <option
                            value={value.map(GameStatusFilter::as_query).unwrap_or("ALL")}
                            selected={*value == *status}
                        >
                            { *label }
                        </option>
                    }) }
                </select>
                <form class="start-game form-inline" onsubmit={on_start}>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Map name"
                        aria-label="Map name"
                        value={(*map_name).clone()}
                        oninput={super::bind_input(&map_name)}
                    />
                    <button type="submit" class="btn btn-primary">{ "Start game" }</button>
                </form>
            </div>
            if *loading {
                <p class="loading">{ "Loading games…" }</p>
            } else if games.is_empty() {
                <p class="empty">{ "No games found." }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Id" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Started" }</th>
                            <th>{ "Finished" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </section>
    }
}
