use super::AnalysisResult;

/// Submission lifecycle for one image selection.
///
/// `Succeeded` and `Failed` are terminal for a submission, but selecting a
/// new image or resubmitting re-enters `ImageSelected`/`Submitting`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ImageSelected,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl Phase {
    /// A file was picked. Any prior result or failure is dropped so a stale
    /// result can never sit next to a fresh preview.
    pub fn select(&mut self) {
        *self = Phase::ImageSelected;
    }

    /// Moves into `Submitting` if a submission is allowed right now.
    /// Refused from `Idle` (nothing selected) and from `Submitting` (one
    /// request in flight at a time).
    pub fn submit(&mut self) -> bool {
        match self {
            Phase::Idle | Phase::Submitting => false,
            Phase::ImageSelected | Phase::Succeeded(_) | Phase::Failed(_) => {
                *self = Phase::Submitting;
                true
            }
        }
    }

    /// Applies the outcome of the in-flight request. Ignored unless a
    /// submission is actually pending.
    pub fn resolve(&mut self, outcome: Result<AnalysisResult, String>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        *self = match outcome {
            Ok(result) => Phase::Succeeded(result),
            Err(reason) => Phase::Failed(reason),
        };
        true
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Phase::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(class: &str) -> AnalysisResult {
        AnalysisResult {
            predicted_class: class.into(),
            original_image: "data:image/png;base64,AA==".into(),
            segmented_image: "data:image/png;base64,BB==".into(),
        }
    }

    #[test]
    fn submit_without_selection_is_refused() {
        let mut phase = Phase::default();
        assert!(!phase.submit());
        assert_eq!(phase, Phase::Idle);
    }

    #[test]
    fn submit_while_in_flight_is_refused() {
        let mut phase = Phase::default();
        phase.select();
        assert!(phase.submit());
        assert!(!phase.submit());
        assert!(phase.is_submitting());
    }

    #[test]
    fn one_submission_resolves_at_most_once() {
        let mut phase = Phase::default();
        phase.select();
        assert!(phase.submit());
        assert!(phase.resolve(Ok(result("Pneumonia"))));
        // a second outcome for the same submission is dropped
        assert!(!phase.resolve(Err("late".into())));
        assert_eq!(phase.result().unwrap().predicted_class, "Pneumonia");
        assert!(phase.failure().is_none());
    }

    #[test]
    fn reselecting_clears_prior_result() {
        let mut phase = Phase::default();
        phase.select();
        phase.submit();
        phase.resolve(Ok(result("Mass")));
        assert!(phase.result().is_some());

        phase.select();
        assert!(phase.result().is_none());
        assert_eq!(phase, Phase::ImageSelected);
    }

    #[test]
    fn reselecting_clears_prior_failure() {
        let mut phase = Phase::default();
        phase.select();
        phase.submit();
        phase.resolve(Err("Failed to analyse image. Please try again.".into()));
        assert!(phase.failure().is_some());

        phase.select();
        assert!(phase.failure().is_none());
    }

    #[test]
    fn resubmitting_supersedes_the_first_result() {
        let mut phase = Phase::default();
        phase.select();
        phase.submit();
        phase.resolve(Ok(result("Pneumonia")));

        assert!(phase.submit());
        phase.resolve(Ok(result("Pneumonia")));
        // indistinguishable from a single submission holding the second result
        assert_eq!(phase, Phase::Succeeded(result("Pneumonia")));
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut phase = Phase::default();
        phase.select();
        phase.submit();
        phase.resolve(Err("transport".into()));
        assert!(phase.submit());
        assert!(phase.is_submitting());
    }

    #[test]
    fn outcome_arriving_after_reselection_is_ignored() {
        let mut phase = Phase::default();
        phase.select();
        phase.submit();
        phase.select();
        assert!(!phase.resolve(Ok(result("Nodule"))));
        assert_eq!(phase, Phase::ImageSelected);
    }
}
