use shared::{ChatMessage, ChatResponse, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::utils::{local_time, now_iso, render_message_content};
use crate::routes::{Navigate, Route};
use crate::state::transcript::Transcript;

const SEND_FAILED_MSG: &str = "Failed to send message. Please try again.";

#[derive(Properties, PartialEq)]
pub struct ChatProps {
    /// Condition carried across the navigation; `None` on reload or direct
    /// entry.
    pub predicted_class: Option<String>,
    pub on_navigate: Navigate,
}

pub enum Msg {
    Input(String),
    Send,
    Reply(u64, ChatResponse),
    SendFailed(u64),
}

/// Conversation scoped to the detected condition.
pub struct ChatPage {
    transcript: Option<Transcript>,
    input: String,
    sending: bool,
    error: Option<&'static str>,
    // bumped per send; replies carrying an older value are dropped
    send_seq: u64,
}

impl Component for ChatPage {
    type Message = Msg;
    type Properties = ChatProps;

    fn create(ctx: &Context<Self>) -> Self {
        let transcript = ctx
            .props()
            .predicted_class
            .as_deref()
            .map(|condition| Transcript::seeded(condition, now_iso()));

        Self {
            transcript,
            input: String::new(),
            sending: false,
            error: None,
            send_seq: 0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Entered without a carried condition: defined fallback, back to
        // intake.
        if first_render && self.transcript.is_none() {
            ctx.props().on_navigate.emit((Route::Analyse, None));
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(value) => {
                self.input = value;
                true
            }
            Msg::Send => self.handle_send(ctx),
            Msg::Reply(seq, reply) => {
                if seq != self.send_seq {
                    log::info!("dropping chat reply for a superseded send");
                    return false;
                }
                self.sending = false;
                match self.transcript.as_mut() {
                    Some(transcript) => {
                        transcript.push_reply(reply);
                        true
                    }
                    None => false,
                }
            }
            Msg::SendFailed(seq) => {
                if seq != self.send_seq {
                    return false;
                }
                self.sending = false;
                self.error = Some(SEND_FAILED_MSG);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(error_msg) = self.error {
            return self.render_error(ctx, error_msg);
        }
        let Some(transcript) = &self.transcript else {
            return html! {};
        };
        let condition = ctx.props().predicted_class.clone().unwrap_or_default();
        let back = ctx
            .props()
            .on_navigate
            .reform(|_: MouseEvent| (Route::Analyse, None));

        html! {
            <div class="chat-page">
                <div class="chat-card">
                    <div class="chat-banner">
                        <h1>{"Radiologix Chatbot"}</h1>
                        <p>{ format!("Discuss your {} diagnosis", condition) }</p>
                    </div>
                    <div class="chat-messages">
                        { for transcript.messages().iter().map(render_message) }
                        {
                            if self.sending {
                                html! {
                                    <div class="chat-message assistant pending">
                                        <i class="fa-solid fa-spinner fa-spin"></i>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    { self.render_compose(ctx) }
                    <p class="disclaimer">
                        {"Disclaimer: This chatbot provides information for educational purposes \
                          only. It is not a substitute for professional medical advice, \
                          diagnosis, or treatment."}
                    </p>
                </div>
                <a class="back-link" onclick={back}>
                    <i class="fa-solid fa-arrow-left"></i>{" Back to Analysis"}
                </a>
            </div>
        }
    }
}

impl ChatPage {
    fn handle_send(&mut self, ctx: &Context<Self>) -> bool {
        if self.sending {
            return false;
        }
        let (Some(transcript), Some(predicted_class)) = (
            self.transcript.as_mut(),
            ctx.props().predicted_class.clone(),
        ) else {
            return false;
        };
        // blank input: silent no-op, nothing appended, no request
        let Some(content) = transcript.push_user(&self.input, now_iso()) else {
            return false;
        };
        self.input.clear();
        self.sending = true;
        self.send_seq += 1;
        let seq = self.send_seq;

        spawn_local({
            let link = ctx.link().clone();
            async move {
                match api::send_chat_message(content, predicted_class).await {
                    Ok(reply) => link.send_message(Msg::Reply(seq, reply)),
                    Err(err) => {
                        log::error!("failed to send message: {err}");
                        link.send_message(Msg::SendFailed(seq));
                    }
                }
            }
        });
        true
    }

    fn render_compose(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Send
        });

        html! {
            <form class="chat-compose" onsubmit={onsubmit}>
                <input
                    type="text"
                    value={self.input.clone()}
                    oninput={oninput}
                    placeholder="Ask about your condition..."
                    disabled={self.sending}
                />
                <button
                    type="submit"
                    disabled={self.sending || self.input.trim().is_empty()}
                >
                    <i class="fa-solid fa-paper-plane"></i>
                </button>
            </form>
        }
    }

    fn render_error(&self, ctx: &Context<Self>, error_msg: &str) -> Html {
        let back = ctx
            .props()
            .on_navigate
            .reform(|_: MouseEvent| (Route::Analyse, None));

        html! {
            <div class="chat-error">
                <i class="fa-solid fa-circle-exclamation"></i>
                <h3>{ error_msg }</h3>
                <a class="back-link" onclick={back}>
                    <i class="fa-solid fa-arrow-left"></i>{" Return to Analysis"}
                </a>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let (class, author) = match message.role {
        Role::User => ("chat-message user", "You"),
        Role::Assistant => ("chat-message assistant", "Radiologix"),
    };

    html! {
        <div class={class}>
            <div class="message-author">
                {
                    if message.role == Role::User {
                        html! { <i class="fa-solid fa-user"></i> }
                    } else {
                        html! { <i class="fa-solid fa-robot"></i> }
                    }
                }
                <span>{ author }</span>
            </div>
            <p class="message-content">{ render_message_content(&message.content) }</p>
            <p class="message-time">{ local_time(&message.timestamp) }</p>
        </div>
    }
}
