use yew::prelude::*;

use crate::routes::{Navigate, Route};
use crate::state::AnalysisResult;

#[derive(Properties, PartialEq)]
pub struct ReportProps {
    /// Result carried across the navigation; `None` on reload or direct
    /// entry.
    pub report: Option<AnalysisResult>,
    pub on_navigate: Navigate,
}

/// Stateless rendering of a carried analysis result.
pub struct ReportPage;

impl Component for ReportPage {
    type Message = ();
    type Properties = ReportProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Entered without a payload: defined fallback, back to intake.
        if first_render && ctx.props().report.is_none() {
            ctx.props().on_navigate.emit((Route::Analyse, None));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(report) = &ctx.props().report else {
            return html! {};
        };
        let back = ctx
            .props()
            .on_navigate
            .reform(|_: MouseEvent| (Route::Analyse, None));

        html! {
            <div class="report-page">
                <div class="report-card">
                    <div class="report-banner">
                        <h1>{"Radiologix Chest X-Ray Report"}</h1>
                    </div>
                    <div class="report-images">
                        <div class="report-image">
                            <h2>{"Original X-Ray"}</h2>
                            <img src={report.original_image.clone()} alt="Chest X-Ray" />
                        </div>
                        <div class="report-image">
                            <h2>{"Segmented Image"}</h2>
                            <img src={report.segmented_image.clone()} alt="Segmented X-Ray" />
                        </div>
                    </div>
                    <h2 class="condition-name">{ &report.predicted_class }</h2>
                    <p class="disclaimer">
                        {"Disclaimer: This report was generated using AI and is intended for \
                          informational purposes only. It is not a substitute for professional \
                          medical advice, diagnosis, or treatment."}
                    </p>
                </div>
                <a class="back-link" onclick={back}>
                    <i class="fa-solid fa-arrow-left"></i>{" Back to Analysis"}
                </a>
            </div>
        }
    }
}
