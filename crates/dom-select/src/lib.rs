//! DOM selector engine
//!
//! Compiles CSS selector text into a [`SelectorList`] and matches it against
//! any tree exposing its elements through the [`Element`] trait.

mod cache;
mod matching;
mod parser;
mod selector;

pub use cache::{
    DEFAULT_CACHE_CAPACITY, SelectorCache, cached_selector_count, compile_cached,
    set_cache_capacity,
};
pub use matching::{Element, match_component, match_pseudo_class};
pub use parser::parse_selector_list;
pub use selector::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NthExpression, PseudoClass, SelectorComponent, SelectorList,
};

/// Compile selector text without touching the cache
pub fn compile(text: &str) -> Result<SelectorList, SelectorError> {
    parse_selector_list(text)
}

/// Selector compilation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { offset: usize, found: char },
    #[error("unexpected end of selector")]
    UnexpectedEnd,
    #[error("unsupported selector: {0}")]
    Unsupported(String),
    #[error("invalid nth expression: {0:?}")]
    InvalidNth(String),
}
