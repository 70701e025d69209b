//! Terminal adapters - interactive wizard prompts.

mod prompter;

pub use prompter::TerminalPrompter;
