//! The catalog keeps items in insertion order and maintains a title index next to
//! them, in the same way a keeper pairs its kept constructs with a lookup.
//!
//! The ordered sequence is authoritative: it may hold several items with the same
//! title, and every query scans it in insertion order. The index only remembers
//! the most recently added item per exact title.

use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::sync::Arc;

use seahash::SeaHasher;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::literature::{ItemRecord, Literature, LiteraryItem};
use crate::settings::Limits;

pub type TitleHasher = BuildHasherDefault<SeaHasher>;

const DECADE_DIVIDER: i32 = 10;
const PERCENTAGE_MULT: usize = 100;

// simple case folding one char at a time, no locale or context involved
fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug)]
pub struct Catalog<T: Literature = LiteraryItem> {
    name: String,
    items: Vec<Arc<T>>,
    index: HashMap<String, Arc<T>, TitleHasher>,
}

impl<T: Literature> Catalog<T> {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("name", "cannot be blank"));
        }
        Ok(Self {
            name,
            items: Vec::new(),
            index: HashMap::default(),
        })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.items.iter()
    }

    // ------------- Mutation -------------
    /// Appends the item and points the title index at it, replacing any earlier
    /// item with the same title in the index (but not in the sequence).
    pub fn add(&mut self, item: T) {
        let item = Arc::new(item);
        debug!(
            catalog = %self.name,
            title = item.title(),
            kind = item.kind(),
            items = self.items.len() + 1,
            "item added"
        );
        self.index.insert(item.title().to_owned(), Arc::clone(&item));
        self.items.push(item);
    }

    // ------------- Lookup -------------
    /// The most recently added item with exactly this title.
    pub fn get(&self, title: &str) -> Option<Arc<T>> {
        self.index.get(title).map(Arc::clone)
    }
    /// Titles in the index that do not contain `substr` (ignoring case), sorted
    /// alphabetically ignoring case.
    pub fn indexed_titles_excluding(&self, substr: &str) -> Vec<String> {
        let needle = fold(substr);
        let mut titles: Vec<String> = self
            .index
            .keys()
            .filter(|title| !fold(title).contains(&needle))
            .cloned()
            .collect();
        titles.sort_by(|a, b| fold(a).cmp(&fold(b)).then_with(|| a.cmp(b)));
        titles
    }

    // ------------- Queries -------------
    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|item| item.title().to_owned()).collect()
    }
    pub fn titles_uppercase(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.title().to_uppercase())
            .collect()
    }
    pub fn titles_containing(&self, substr: &str) -> Vec<String> {
        let needle = fold(substr);
        self.items
            .iter()
            .filter(|item| fold(item.title()).contains(&needle))
            .map(|item| item.title().to_owned())
            .collect()
    }
    /// A sorted copy of the titles; the catalog order is left untouched.
    pub fn titles_alphabetical(&self) -> Vec<String> {
        let mut titles = self.titles();
        titles.sort_by_cached_key(|title| fold(title));
        titles
    }
    /// Titles of items published in the same decade as `decade` (any year of that
    /// decade works, 1953 selects the fifties just like 1950 does).
    pub fn group_by_decade(&self, decade: i32) -> Vec<String> {
        let bucket = decade.div_euclid(DECADE_DIVIDER);
        self.items
            .iter()
            .filter(|item| item.year_published().div_euclid(DECADE_DIVIDER) == bucket)
            .map(|item| item.title().to_owned())
            .collect()
    }
    /// The longest title in characters. The first one wins a tie.
    pub fn longest_title(&self) -> Result<&str> {
        let mut longest: Option<(&str, usize)> = None;
        for item in &self.items {
            let length = item.title().chars().count();
            match longest {
                Some((_, max)) if length <= max => (),
                _ => longest = Some((item.title(), length)),
            }
        }
        longest
            .map(|(title, _)| title)
            .ok_or_else(|| self.empty("longest_title"))
    }
    pub fn has_item_in_year(&self, year: i32) -> bool {
        self.items.iter().any(|item| item.year_published() == year)
    }
    pub fn count_containing(&self, substr: &str) -> usize {
        let needle = fold(substr);
        self.items
            .iter()
            .filter(|item| fold(item.title()).contains(&needle))
            .count()
    }
    /// Share of items published in `lo..=hi`, as a percentage truncated toward zero.
    pub fn percent_in_range(&self, lo: i32, hi: i32) -> Result<u32> {
        if self.items.is_empty() {
            return Err(self.empty("percent_in_range"));
        }
        let in_range = self
            .items
            .iter()
            .filter(|item| (lo..=hi).contains(&item.year_published()))
            .count();
        // at most 100, so the narrowing cannot truncate
        Ok((in_range * PERCENTAGE_MULT / self.items.len()) as u32)
    }
    /// The item with the earliest year. The first one wins a tie.
    pub fn oldest(&self) -> Result<Arc<T>> {
        // min_by_key keeps the first of several equal minima
        self.items
            .iter()
            .min_by_key(|item| item.year_published())
            .map(Arc::clone)
            .ok_or_else(|| self.empty("oldest"))
    }
    /// Items whose title is exactly `length` characters long.
    pub fn items_with_title_length(&self, length: usize) -> Vec<Arc<T>> {
        self.items
            .iter()
            .filter(|item| item.title().chars().count() == length)
            .map(Arc::clone)
            .collect()
    }

    fn empty(&self, operation: &'static str) -> CatalogError {
        warn!(catalog = %self.name, operation, "query on empty catalog");
        CatalogError::EmptyCatalog(operation)
    }
}

impl Catalog<LiteraryItem> {
    /// Validates every record with `limits` and adds them in order. The first
    /// invalid record aborts the whole build.
    pub fn from_records(
        name: impl Into<String>,
        records: impl IntoIterator<Item = ItemRecord>,
        limits: &Limits,
    ) -> Result<Self> {
        let mut catalog = Self::new(name)?;
        for record in records {
            catalog.add(record.into_item(limits)?);
        }
        Ok(catalog)
    }
}
