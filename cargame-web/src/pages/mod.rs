use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub mod about;
pub mod car_movements;
pub mod cars;
pub mod game;
pub mod games;
pub mod maps;
pub mod not_found;
pub mod running_game;

/// Mirror a text input into a state handle.
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Current value of the `<select>` that fired `e`.
pub(crate) fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}
