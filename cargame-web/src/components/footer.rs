use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer text-muted">{ "Car Game" }</footer>
    }
}
