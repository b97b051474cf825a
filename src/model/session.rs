/// Where the planning workflow currently stands. Derived from the
/// three slots below, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Idle,
    Proposed,
    Selected,
    Briefed,
}

/// Session-scoped workflow state: proposed titles, the user's current
/// selection, and the briefs generated so far.
///
/// Invariants held here rather than by callers:
/// - a new proposal batch clears selection and briefs in one step,
/// - an empty proposal batch is rejected so a failed regeneration
///   never wipes earlier results,
/// - the selection only ever contains currently proposed titles.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    proposed: Vec<String>,
    selected: Vec<String>,
    briefs: Vec<(String, String)>,
}

impl SessionState {
    pub fn stage(&self) -> WorkflowStage {
        if !self.briefs.is_empty() {
            WorkflowStage::Briefed
        } else if !self.selected.is_empty() {
            WorkflowStage::Selected
        } else if !self.proposed.is_empty() {
            WorkflowStage::Proposed
        } else {
            WorkflowStage::Idle
        }
    }

    /// Installs a fresh batch of proposed titles, dropping the old
    /// selection and brief store together. Returns false (and changes
    /// nothing) when the batch is empty.
    pub fn apply_proposals(&mut self, titles: Vec<String>) -> bool {
        if titles.is_empty() {
            return false;
        }
        self.proposed = titles;
        self.selected.clear();
        self.briefs.clear();
        true
    }

    /// Recomputes the selection from whatever the checkboxes say,
    /// keeping only titles that are still proposed.
    pub fn set_selection(&mut self, titles: Vec<String>) {
        self.selected = titles
            .into_iter()
            .filter(|t| self.proposed.iter().any(|p| p == t))
            .collect();
    }

    /// Inserts or overwrites one brief. First insertion order is
    /// preserved across overwrites.
    pub fn store_brief(&mut self, title: &str, brief: String) {
        if let Some(entry) = self.briefs.iter_mut().find(|(t, _)| t == title) {
            entry.1 = brief;
        } else {
            self.briefs.push((title.to_string(), brief));
        }
    }

    pub fn proposed(&self) -> &[String] {
        &self.proposed
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn briefs(&self) -> &[(String, String)] {
        &self.briefs
    }

    pub fn brief_for(&self, title: &str) -> Option<&str> {
        self.briefs
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, b)| b.as_str())
    }
}
