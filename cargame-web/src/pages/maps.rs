use cargame_core::{ErrorReporter, GameMapDto};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::error_alerts::ErrorAlerts;
use crate::errors::use_errors;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct MapsPageProps {
    pub client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[function_component(MapsPage)]
pub fn maps_page(props: &MapsPageProps) -> Html {
    let errors = use_errors();
    let maps = use_state(Vec::<GameMapDto>::new);
    let loading = use_state(|| false);
    let map_name = use_state(String::new);
    let file_ref = use_node_ref();

    let reload = {
        let client = props.client.clone();
        let errors = errors.clone();
        let maps = maps.clone();
        let loading = loading.clone();
        Callback::from(move |()| {
            let client = client.clone();
            let mut errors = errors.clone();
            let maps = maps.clone();
            let loading = loading.clone();
            errors.clear();
            loading.set(true);
            spawn_local(async move {
                match client.list_maps().await {
                    Ok(list) => maps.set(list),
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

    let on_upload = {
        let client = props.client.clone();
        let errors = errors.clone();
        let map_name = map_name.clone();
        let file_ref = file_ref.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut errors = errors.clone();
            errors.clear();
            let file = file_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                errors.add("Choose a CSV file with the map layout");
                return;
            };
            let client = client.clone();
            let name = (*map_name).clone();
            let map_name = map_name.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match client.upload_map(&name, &file).await {
                    Ok(map) => {
                        log::info!("Uploaded map {}", map.name);
                        map_name.set(String::new());
                        reload.emit(());
                    }
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let delete_map = {
        let client = props.client.clone();
        let errors = errors.clone();
        let reload = reload.clone();
        Callback::from(move |id: i64| {
            let client = client.clone();
            let mut errors = errors.clone();
            let reload = reload.clone();
            errors.clear();
            spawn_local(async move {
                match client.delete_map(id).await {
                    Ok(()) => reload.emit(()),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let start_game = {
        let client = props.client.clone();
        let errors = errors.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |map_name: String| {
            let client = client.clone();
            let mut errors = errors.clone();
            let on_navigate = on_navigate.clone();
            errors.clear();
            spawn_local(async move {
                match client.start_game(&map_name).await {
                    Ok(game) => on_navigate.emit(match game.id {
                        Some(id) => Route::RunningGame {
                            id: id.to_string(),
                            name: game.name,
                        },
                        None => Route::Games,
                    }),
                    Err(err) => errors.add_from_error(&err),
                }
            });
        })
    };

    let rows = maps.iter().map(|map| {
        let on_start = {
            let start_game = start_game.clone();
            let name = map.name.clone();
            Callback::from(move |_: MouseEvent| start_game.emit(name.clone()))
        };
        let on_delete = map.id.map(|id| {
            let delete_map = delete_map.clone();
            Callback::from(move |_: MouseEvent| delete_map.emit(id))
        });
        html! {
            <tr key={map.name.clone()}>
                <td>{ map.name.clone() }</td>
                <td>{ map.size.map(|size| format!("{size} × {size}")).unwrap_or_default() }</td>
                <td>{ map.walls.len() }</td>
                <td>{ if map.used { "In use" } else { "Free" } }</td>
                <td class="actions">
                    <button type="button" class="btn btn-sm btn-success" disabled={map.used} onclick={on_start}>
                        { "Start game" }
                    </button>
                    <button type="button" class="btn btn-sm btn-danger" disabled={map.used || on_delete.is_none()} onclick={on_delete}>
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <section class="page maps-page" data-testid="maps-page">
            <h1>{ "Maps" }</h1>
            <ErrorAlerts messages={errors.messages().to_vec()} />
            <form class="upload-map form-inline" onsubmit={on_upload}>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Map name"
                    aria-label="Map name"
                    value={(*map_name).clone()}
                    oninput={super::bind_input(&map_name)}
                />
                <input type="file" class="form-control-file" accept=".csv,text/csv" aria-label="Map file" ref={file_ref} />
                <button type="submit" class="btn btn-primary">{ "Upload map" }</button>
            </form>
            if *loading {
                <p class="loading">{ "Loading maps…" }</p>
            } else if maps.is_empty() {
                <p class="empty">{ "No maps available." }</p>
            } else {
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Size" }</th>
                            <th>{ "Walls" }</th>
                            <th>{ "Status" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            }
        </section>
    }
}
