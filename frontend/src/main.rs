use gloo_events::EventListener;
use yew::prelude::*;

mod api;
mod components;
mod error;
mod routes;
mod state;

use components::analyse_page::AnalysePage;
use components::chat_page::ChatPage;
use components::header::render_header;
use components::report_page::ReportPage;
use routes::{Handoff, Route};

enum Msg {
    /// In-app navigation carrying an optional one-shot payload.
    Navigate(Route, Option<Handoff>),
    /// Browser-driven hash change (back/forward, manual edit). Carries no
    /// payload; history is the authority here.
    HashChanged(Route),
}

struct App {
    route: Route,
    handoff: Option<Handoff>,
    _hash_listener: EventListener,
}

fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "hashchange", move |_| {
            link.send_message(Msg::HashChanged(current_route()));
        });

        Self {
            route: current_route(),
            handoff: None,
            _hash_listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route, handoff) => {
                self.route = route;
                self.handoff = handoff;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash(route.hash());
                }
                true
            }
            Msg::HashChanged(route) => {
                if route == self.route {
                    return false;
                }
                self.route = route;
                // only a payload already addressed to this view survives a
                // history jump
                self.handoff = self.handoff.take().filter(|h| h.destination() == route);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx
            .link()
            .callback(|(route, handoff)| Msg::Navigate(route, handoff));

        let page = match self.route {
            Route::Analyse => html! { <AnalysePage on_navigate={on_navigate} /> },
            Route::Report => {
                let report = match &self.handoff {
                    Some(Handoff::Report(result)) => Some(result.clone()),
                    _ => None,
                };
                html! { <ReportPage report={report} on_navigate={on_navigate} /> }
            }
            Route::Chatbot => {
                let predicted_class = match &self.handoff {
                    Some(Handoff::Chatbot { predicted_class }) => Some(predicted_class.clone()),
                    _ => None,
                };
                html! { <ChatPage predicted_class={predicted_class} on_navigate={on_navigate} /> }
            }
        };

        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { page }
                </main>

                <footer class="app-footer">
                    <p>{"Radiologix | AI-assisted chest X-ray analysis"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
