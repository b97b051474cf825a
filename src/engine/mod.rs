pub mod brief_generator;
pub mod error;
pub mod list_parser;
pub mod llm_client;
pub mod prompt_builder;
pub mod strategy_generator;

#[cfg(test)]
pub mod test_support;
