use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-lungs"></i>{" Radiologix"}</h1>
            <p class="subtitle">{"AI-assisted chest X-ray analysis"}</p>
        </header>
    }
}
