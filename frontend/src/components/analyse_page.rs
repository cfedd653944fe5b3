use gloo_file::{File as GlooFile, ObjectUrl};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::error::ApiError;
use crate::routes::{Handoff, Navigate, Route};
use crate::state::phase::Phase;
use crate::state::AnalysisResult;

const NO_IMAGE_MSG: &str = "Please upload an X-ray image.";
const ANALYSE_FAILED_MSG: &str = "Failed to analyse image. Please try again.";

#[derive(Properties, PartialEq)]
pub struct AnalyseProps {
    pub on_navigate: Navigate,
}

pub enum Msg {
    ImageSelected(GlooFile),
    Submit,
    Resolved(u64, Result<AnalysisResult, ApiError>),
    OpenReport,
    OpenChatbot,
}

/// Image intake plus the analysis submission workflow.
pub struct AnalysePage {
    image: Option<GlooFile>,
    preview: Option<ObjectUrl>,
    phase: Phase,
    validation: Option<&'static str>,
    // bumped on every selection and submission; responses carrying an older
    // value are dropped on arrival
    submission: u64,
}

impl Component for AnalysePage {
    type Message = Msg;
    type Properties = AnalyseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            image: None,
            preview: None,
            phase: Phase::default(),
            validation: None,
            submission: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ImageSelected(file) => self.handle_image_selected(file),
            Msg::Submit => self.handle_submit(ctx),
            Msg::Resolved(seq, outcome) => self.handle_resolved(seq, outcome),
            Msg::OpenReport => {
                if let Some(result) = self.phase.result() {
                    ctx.props()
                        .on_navigate
                        .emit((Route::Report, Some(Handoff::Report(result.clone()))));
                }
                false
            }
            Msg::OpenChatbot => {
                if let Some(result) = self.phase.result() {
                    let handoff = Handoff::Chatbot {
                        predicted_class: result.predicted_class.clone(),
                    };
                    ctx.props().on_navigate.emit((Route::Chatbot, Some(handoff)));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="analyse-page">
                <h1 class="page-title">{"Analyse Your Chest X-Ray"}</h1>
                <div class="analyse-card">
                    { self.render_upload_area(ctx) }
                    { self.render_error_message() }
                    { self.render_submit_button(ctx) }
                    { self.render_result(ctx) }
                </div>
            </div>
        }
    }
}

impl AnalysePage {
    fn handle_image_selected(&mut self, file: GlooFile) -> bool {
        // a response still in flight for the old image must never pair with
        // this one
        self.submission += 1;
        self.preview = Some(ObjectUrl::from(file.clone()));
        self.image = Some(file);
        self.phase.select();
        self.validation = None;
        true
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        let Some(file) = self.image.clone() else {
            self.validation = Some(NO_IMAGE_MSG);
            return true;
        };
        if !self.phase.submit() {
            return false;
        }
        self.validation = None;
        self.submission += 1;
        let seq = self.submission;

        spawn_local({
            let link = ctx.link().clone();
            async move {
                let outcome = api::analyse_image(&file).await;
                link.send_message(Msg::Resolved(seq, outcome));
            }
        });
        true
    }

    fn handle_resolved(&mut self, seq: u64, outcome: Result<AnalysisResult, ApiError>) -> bool {
        if seq != self.submission {
            log::info!("dropping analysis response for a superseded submission");
            return false;
        }
        match outcome {
            Ok(result) => self.phase.resolve(Ok(result)),
            Err(err) => {
                log::error!("failed to analyse image: {err}");
                self.phase.resolve(Err(ANALYSE_FAILED_MSG.to_owned()))
            }
        }
    }

    fn error_message(&self) -> Option<&str> {
        match self.validation {
            Some(msg) => Some(msg),
            None => self.phase.failure(),
        }
    }

    fn render_upload_area(&self, ctx: &Context<Self>) -> Html {
        let handle_change = ctx.link().batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input
                .files()
                .and_then(|list| list.item(0))
                .filter(|file| {
                    let is_image = file.type_().starts_with("image/");
                    if !is_image {
                        log::warn!("skipping non-image file: {}", file.name());
                    }
                    is_image
                })
                .map(GlooFile::from);
            input.set_value("");
            // dialog cancelled or nothing usable picked: no-op
            file.map(Msg::ImageSelected)
        });

        html! {
            <label for="image-upload" class="upload-area">
                {
                    if let Some(url) = &self.preview {
                        html! { <img src={url.to_string()} alt="X-ray preview" class="upload-preview" /> }
                    } else {
                        html! {
                            <div class="upload-placeholder">
                                <i class="fa-solid fa-cloud-arrow-up"></i>
                                <p>{"Click to upload an X-ray image"}</p>
                                <p class="file-types">{"(Supported formats: JPG, PNG)"}</p>
                            </div>
                        }
                    }
                }
                <input
                    id="image-upload"
                    type="file"
                    accept="image/jpeg,image/png"
                    style="display: none;"
                    onchange={handle_change}
                />
            </label>
        }
    }

    fn render_error_message(&self) -> Html {
        if let Some(error_msg) = self.error_message() {
            html! {
                <div class="error-message">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <p>{ error_msg }</p>
                </div>
            }
        } else {
            html! {}
        }
    }

    fn render_submit_button(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| Msg::Submit);
        html! {
            <button
                class="analyze-btn"
                onclick={onclick}
                disabled={self.phase.is_submitting()}
            >
                {
                    if self.phase.is_submitting() {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analysing..."}</> }
                    } else {
                        html! { <>{"Analyse X-Ray"}</> }
                    }
                }
            </button>
        }
    }

    fn render_result(&self, ctx: &Context<Self>) -> Html {
        let Some(result) = self.phase.result() else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <div class="results-container">
                <h2>{"Analysis Result"}</h2>
                <p class="predicted-condition">
                    {"Predicted Condition: "}
                    <span class="condition-name">{ &result.predicted_class }</span>
                </p>
                <div class="result-actions">
                    <button class="analyze-btn" onclick={link.callback(|_| Msg::OpenReport)}>
                        <i class="fa-solid fa-file-lines"></i>{" See Report"}
                    </button>
                    <button class="analyze-btn secondary" onclick={link.callback(|_| Msg::OpenChatbot)}>
                        <i class="fa-solid fa-comments"></i>{" Converse"}
                    </button>
                </div>
            </div>
        }
    }
}
