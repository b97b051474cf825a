use tracing::info;

use crate::engine::error::GenError;
use crate::engine::list_parser::parse_numbered_list;
use crate::engine::llm_client::TextGenerator;
use crate::engine::prompt_builder::PromptBuilder;

/// Stage-1 completions are short lists; keep the budget small.
const TITLES_MAX_TOKENS: u32 = 1024;

/// Stage 1: ask the backend for up to 10 new article titles.
///
/// On error the caller must leave its existing proposals untouched;
/// an `Ok` with an empty list means the response held no parseable
/// titles and is treated the same way.
pub fn propose_strategies(
    client: &dyn TextGenerator,
    existing_titles: &str,
    guidelines: &str,
) -> Result<Vec<String>, GenError> {
    let prompt = PromptBuilder::build_titles_prompt(existing_titles, guidelines);
    let raw = client.generate(&prompt, TITLES_MAX_TOKENS)?;

    let titles = parse_numbered_list(&raw);
    info!(count = titles.len(), "parsed proposed titles");
    Ok(titles)
}
