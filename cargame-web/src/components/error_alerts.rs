use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub messages: Vec<String>,
}

/// Inline list of the failures a view has collected; renders nothing when empty.
#[function_component(ErrorAlerts)]
pub fn error_alerts(props: &Props) -> Html {
    if props.messages.is_empty() {
        return html! {};
    }
    html! {
        <div class="alert alert-danger" role="alert" data-testid="error-alerts">
            <ul class="mb-0">
                { for props.messages.iter().map(|message| html! { <li>{ message.clone() }</li> }) }
            </ul>
        </div>
    }
}
