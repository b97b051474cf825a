/// Builds the two prompts sent to the LLM.
/// This struct is intentionally dumb: it only formats text.
/// No parsing, no networking, no session state.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Stage 1: propose new article titles. `existing_titles` is the
    /// normalized list joined one per line, possibly empty.
    pub fn build_titles_prompt(existing_titles: &str, guidelines: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are a content strategist planning the next batch of articles.\n\n",
        );

        push_existing_titles(&mut prompt, existing_titles);
        push_guidelines(&mut prompt, guidelines);

        prompt.push_str(
            "TASK:\n\
Propose exactly 10 NEW article titles that are not in the existing list.\n\n\
Rules:\n\
- Derive audience, tone, topics to avoid, and topics to use strictly from the guidelines above.\n\
- Do not invent an audience, product, or theme the guidelines do not state.\n\
- Every title must serve the stated goals.\n\n\
Output Format:\n\
A numbered list (1. to 10.), one title per line, nothing else.\n\
Do not add commentary, headers, or explanations.\n",
        );

        prompt
    }

    /// Stage 2: expand one chosen title into a full content brief
    /// following the user's template verbatim.
    pub fn build_brief_prompt(title: &str, guidelines: &str, template: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are a content strategist writing a detailed content brief for one article.\n\n",
        );

        prompt.push_str("ARTICLE TITLE:\n");
        prompt.push_str(title);
        prompt.push_str("\n\n");

        push_guidelines(&mut prompt, guidelines);

        prompt.push_str("BRIEF TEMPLATE:\n");
        prompt.push_str(template);
        prompt.push_str("\n\n");

        prompt.push_str(
            "TASK:\n\
Fill in every section of the template above for this article.\n\n\
Rules:\n\
- Keep the template's section structure and headings exactly.\n\
- Match tone and audience strictly to the guidelines; do not invent an audience they do not state.\n\
- Replace every placeholder with concrete content.\n\
- Output the completed brief as markdown, nothing else.\n",
        );

        prompt
    }
}

fn push_existing_titles(prompt: &mut String, existing_titles: &str) {
    prompt.push_str("EXISTING TITLES (do not repeat these):\n");
    if existing_titles.trim().is_empty() {
        prompt.push_str("(none yet)\n");
    } else {
        prompt.push_str(existing_titles.trim());
        prompt.push('\n');
    }
    prompt.push('\n');
}

fn push_guidelines(prompt: &mut String, guidelines: &str) {
    prompt.push_str("STRATEGIC GUIDELINES:\n");
    if guidelines.trim().is_empty() {
        prompt.push_str("(none provided)\n");
    } else {
        prompt.push_str(guidelines.trim());
        prompt.push('\n');
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_prompt_is_deterministic() {
        let a = PromptBuilder::build_titles_prompt("One\nTwo", "TONE: dry");
        let b = PromptBuilder::build_titles_prompt("One\nTwo", "TONE: dry");
        assert_eq!(a, b);
    }

    #[test]
    fn titles_prompt_embeds_inputs_verbatim() {
        let prompt = PromptBuilder::build_titles_prompt("Existing Title", "AUDIENCE: analysts");
        assert!(prompt.contains("Existing Title"));
        assert!(prompt.contains("AUDIENCE: analysts"));
        assert!(prompt.contains("exactly 10"));
    }

    #[test]
    fn empty_title_list_gets_a_placeholder() {
        let prompt = PromptBuilder::build_titles_prompt("", "g");
        assert!(prompt.contains("(none yet)"));
    }

    #[test]
    fn brief_prompt_carries_title_guidelines_and_template() {
        let prompt =
            PromptBuilder::build_brief_prompt("My Title", "TONE: calm", "## Section\n- [fill]");
        assert!(prompt.contains("My Title"));
        assert!(prompt.contains("TONE: calm"));
        assert!(prompt.contains("## Section\n- [fill]"));
    }
}
