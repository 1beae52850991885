//! Compiled selector cache
//!
//! Thread-local, bounded, least-recently-used. Keys are the selector text
//! exactly as given; failed compilations are never stored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{SelectorError, SelectorList, parse_selector_list};

/// Default number of compiled selectors kept per thread
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// LRU map from selector text to compiled selector
#[derive(Debug)]
pub struct SelectorCache {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    tick: u64,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    selector: Rc<SelectorList>,
    last_used: u64,
}

impl SelectorCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, text: &str) -> Option<Rc<SelectorList>> {
        self.tick += 1;
        match self.entries.get_mut(text) {
            Some(entry) => {
                entry.last_used = self.tick;
                self.hits += 1;
                Some(Rc::clone(&entry.selector))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, text: &str, selector: Rc<SelectorList>) {
        if self.capacity == 0 {
            return;
        }
        if !self.entries.contains_key(text) {
            while self.entries.len() >= self.capacity {
                self.evict_oldest();
            }
        }
        self.tick += 1;
        self.entries.insert(
            text.to_string(),
            CacheEntry {
                selector,
                last_used: self.tick,
            },
        );
    }

    /// Change the bound, evicting least recently used entries as needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.evict_oldest();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all cached entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

thread_local! {
    static SELECTOR_CACHE: RefCell<SelectorCache> =
        RefCell::new(SelectorCache::new(DEFAULT_CACHE_CAPACITY));
}

/// Compile `text`, reusing this thread's cached compilation when present
pub fn compile_cached(text: &str) -> Result<Rc<SelectorList>, SelectorError> {
    if let Some(hit) = SELECTOR_CACHE.with(|cache| cache.borrow_mut().get(text)) {
        return Ok(hit);
    }
    tracing::trace!(selector = text, "selector cache miss");
    let compiled = Rc::new(parse_selector_list(text)?);
    SELECTOR_CACHE.with(|cache| cache.borrow_mut().put(text, Rc::clone(&compiled)));
    Ok(compiled)
}

/// Bound this thread's selector cache; 0 disables caching
pub fn set_cache_capacity(capacity: usize) {
    SELECTOR_CACHE.with(|cache| cache.borrow_mut().set_capacity(capacity));
}

/// Number of selectors cached on this thread
pub fn cached_selector_count() -> usize {
    SELECTOR_CACHE.with(|cache| cache.borrow().len())
}
