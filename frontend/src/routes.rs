use yew::Callback;

use crate::state::AnalysisResult;

/// Views addressable from the location hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Analyse,
    Report,
    Chatbot,
}

impl Route {
    /// Parses a location hash. Unknown or empty hashes land on the intake
    /// page.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "/report" => Route::Report,
            "/chatbot" => Route::Chatbot,
            _ => Route::Analyse,
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Route::Analyse => "#/analyse",
            Route::Report => "#/report",
            Route::Chatbot => "#/chatbot",
        }
    }
}

/// One-shot payload carried across a single navigation. Each navigation owns
/// its copy; nothing is persisted, so a reload, a direct hash edit, or a
/// history jump arrives with no payload and the destination falls back to
/// the intake page.
#[derive(Clone, Debug, PartialEq)]
pub enum Handoff {
    Report(AnalysisResult),
    Chatbot { predicted_class: String },
}

impl Handoff {
    pub fn destination(&self) -> Route {
        match self {
            Handoff::Report(_) => Route::Report,
            Handoff::Chatbot { .. } => Route::Chatbot,
        }
    }
}

/// Navigation request emitted by a page: destination plus optional payload.
pub type Navigate = Callback<(Route, Option<Handoff>)>;
