use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="page about-page" data-testid="about-page">
            <h1>{ "About" }</h1>
            <p>
                { "Upload maps, register cars and start games. Cars placed in a running game can be " }
                { "driven forward, turned and rewound through their move history." }
            </p>
            <p class="text-muted">{ "Every movement is recorded and can be searched under Car Movements." }</p>
        </section>
    }
}
