use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="page not-found" aria-live="assertive" data-testid="not-found-page">
            <h1>{ "Page not found" }</h1>
            <p>{ "There is nothing at this address." }</p>
            <button type="button" class="btn btn-primary" onclick={go_home}>
                { "Back to maps" }
            </button>
        </section>
    }
}
