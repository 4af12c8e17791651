//! Language-specific rules for sentence boundary detection
//!
//! Rules are data: TOML documents describing terminators, enclosures,
//! abbreviations and sentence starters. English and Japanese are embedded;
//! other languages can be loaded from files.

mod abbreviation;
mod config;
mod loader;
mod rules;

pub use abbreviation::AbbreviationTrie;
pub use config::{
    Abbreviations, Ellipsis, EnclosurePair, Enclosures, LanguageConfig, Metadata,
    SentenceStarters, Terminators,
};
pub use loader::{get_language_config, list_available_languages, load_from_file};
pub use rules::{EnclosureRole, LanguageRules};
