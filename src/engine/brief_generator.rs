use tracing::{info, warn};

use crate::engine::error::GenError;
use crate::engine::llm_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::session::SessionState;

/// Briefs are long-form; give the backend room.
const BRIEF_MAX_TOKENS: u32 = 4096;

/// Stage 2, one item: expand a single title into a brief. The result
/// is opaque markdown; no parsing happens here.
pub fn generate_brief(
    client: &dyn TextGenerator,
    title: &str,
    guidelines: &str,
    template: &str,
) -> Result<String, GenError> {
    let prompt = PromptBuilder::build_brief_prompt(title, guidelines, template);
    client.generate(&prompt, BRIEF_MAX_TOKENS)
}

/// What a batch run did, for the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub attempted: usize,
    pub stored: usize,
    pub failed: Vec<String>,
}

/// Stage 2, batch: generate a brief for every selected title, in
/// selection order, one blocking call at a time.
///
/// A failing title is skipped and the batch continues; `on_progress`
/// fires after every attempt, success or not, so the counter always
/// reaches total/total.
pub fn generate_briefs_batch(
    client: &dyn TextGenerator,
    session: &mut SessionState,
    guidelines: &str,
    template: &str,
    mut on_progress: impl FnMut(usize, usize),
) -> BatchOutcome {
    let titles: Vec<String> = session.selected().to_vec();
    let total = titles.len();
    let mut outcome = BatchOutcome::default();

    for (done, title) in titles.iter().enumerate() {
        match generate_brief(client, title, guidelines, template) {
            Ok(brief) => {
                session.store_brief(title, brief);
                outcome.stored += 1;
            }
            Err(err) => {
                warn!(%title, error = %err, "brief generation failed, skipping");
                outcome.failed.push(title.clone());
            }
        }
        outcome.attempted += 1;
        on_progress(done + 1, total);
    }

    info!(
        stored = outcome.stored,
        failed = outcome.failed.len(),
        "brief batch finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::StubGenerator;

    fn session_with_selection(titles: &[&str]) -> SessionState {
        let mut session = SessionState::default();
        let owned: Vec<String> = titles.iter().map(|s| s.to_string()).collect();
        session.apply_proposals(owned.clone());
        session.set_selection(owned);
        session
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let stub = StubGenerator::scripted(vec![Some("brief a"), None, Some("brief c")]);
        let mut session = session_with_selection(&["A", "B", "C"]);
        let mut reports = Vec::new();

        let outcome = generate_briefs_batch(&stub, &mut session, "g", "t", |done, total| {
            reports.push((done, total));
        });

        assert_eq!(outcome.attempted, 3);
        assert_eq!(outcome.stored, 2);
        assert_eq!(outcome.failed, vec!["B".to_string()]);
        assert_eq!(session.briefs().len(), 2);
        assert_eq!(session.brief_for("A"), Some("brief a"));
        assert_eq!(session.brief_for("B"), None);
        assert_eq!(reports, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn all_failures_still_reach_full_progress() {
        let stub = StubGenerator::failing();
        let mut session = session_with_selection(&["A", "B"]);
        let mut last = (0, 0);

        let outcome = generate_briefs_batch(&stub, &mut session, "g", "t", |done, total| {
            last = (done, total);
        });

        assert_eq!(last, (2, 2));
        assert_eq!(outcome.stored, 0);
        assert!(session.briefs().is_empty());
    }

    #[test]
    fn briefs_are_stored_in_selection_order() {
        let stub = StubGenerator::replying("same brief");
        let mut session = session_with_selection(&["First", "Second", "Third"]);

        generate_briefs_batch(&stub, &mut session, "g", "t", |_, _| {});

        let order: Vec<&str> = session.briefs().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn empty_selection_is_a_clean_no_op() {
        let stub = StubGenerator::replying("unused");
        let mut session = SessionState::default();
        let mut calls = 0;

        let outcome = generate_briefs_batch(&stub, &mut session, "g", "t", |_, _| calls += 1);

        assert_eq!(outcome, BatchOutcome::default());
        assert_eq!(calls, 0);
    }

    #[test]
    fn regenerating_a_title_overwrites_its_brief() {
        let mut session = session_with_selection(&["A"]);

        let first = StubGenerator::replying("old text");
        generate_briefs_batch(&first, &mut session, "g", "t", |_, _| {});

        let second = StubGenerator::replying("new text");
        generate_briefs_batch(&second, &mut session, "g", "t", |_, _| {});

        assert_eq!(session.briefs().len(), 1);
        assert_eq!(session.brief_for("A"), Some("new text"));
    }
}
