pub mod phase;
pub mod transcript;

use shared::AnalyseResponse;

/// A completed analysis in displayable form. The image fields hold `data:`
/// URIs usable directly as `img src` values. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub predicted_class: String,
    pub original_image: String,
    pub segmented_image: String,
}

pub fn png_data_uri(base64: &str) -> String {
    format!("data:image/png;base64,{}", base64)
}

impl From<AnalyseResponse> for AnalysisResult {
    fn from(resp: AnalyseResponse) -> Self {
        Self {
            predicted_class: resp.predicted_class,
            original_image: png_data_uri(&resp.original_image),
            segmented_image: png_data_uri(&resp.segmented_image),
        }
    }
}
