//! Cataloged works: the [`Literature`] capability set, its concrete kinds and the
//! [`LiteraryItem`] sum type that lets a single catalog hold all of them.
//!
//! Every constructor validates before it builds, so a value of any of these types
//! is always well formed. Fields are private and only exposed through getters,
//! which keeps title and year immutable after construction.

// custom made ordering for novels
use std::cmp::Ordering;
// used to print out readable forms of an item
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::settings::Limits;

pub trait Literature {
    fn title(&self) -> &str;
    fn year_published(&self) -> i32;
    /// Short, stable name of the concrete kind, e.g. `"novel"`.
    fn kind(&self) -> &'static str;
}

// ------------- Validation -------------
// Shared by every kind: a title that is not blank and not too long, and a year
// that is not beyond the configured ceiling.
fn validate_text(field: &'static str, value: &str, limits: &Limits) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, "cannot be blank"));
    }
    let length = value.chars().count();
    if length > limits.max_title_length {
        return Err(CatalogError::validation(
            field,
            format!(
                "is {length} characters long, the maximum is {}",
                limits.max_title_length
            ),
        ));
    }
    Ok(())
}

fn validate_year_ceiling(year: i32, limits: &Limits) -> Result<()> {
    if year > limits.max_year {
        return Err(CatalogError::validation(
            "year",
            format!("{year} is after {}", limits.max_year),
        ));
    }
    Ok(())
}

// ------------- Novel -------------
#[derive(Debug, Clone, Serialize)]
pub struct Novel {
    title: String,
    author: String,
    #[serde(rename = "year")]
    year_published: i32,
}

impl Novel {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Result<Self> {
        Self::with_limits(title, author, year, &Limits::default())
    }
    pub fn with_limits(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        limits: &Limits,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();
        validate_text("title", &title, limits)?;
        validate_text("author", &author, limits)?;
        validate_year_ceiling(year, limits)?;
        if year < limits.min_novel_year {
            return Err(CatalogError::validation(
                "year",
                format!("{year} is before {}", limits.min_novel_year),
            ));
        }
        Ok(Self {
            title,
            author,
            year_published: year,
        })
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    /// Orders against a possibly absent novel; absence is an error, not an ordering.
    pub fn compare_to(&self, other: Option<&Novel>) -> Result<Ordering> {
        other
            .map(|other| self.cmp(other))
            .ok_or(CatalogError::NullArgument("novel to compare with"))
    }
}
impl Literature for Novel {
    fn title(&self) -> &str {
        &self.title
    }
    fn year_published(&self) -> i32 {
        self.year_published
    }
    fn kind(&self) -> &'static str {
        "novel"
    }
}
impl Ord for Novel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}
impl PartialOrd for Novel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Novel {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}
impl Eq for Novel {}
impl fmt::Display for Novel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor: {}\nYear Published: {}",
            self.title, self.author, self.year_published
        )
    }
}

// ------------- Magazine -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    title: String,
    #[serde(rename = "year")]
    year_published: i32,
}

impl Magazine {
    pub fn new(title: impl Into<String>, year: i32) -> Result<Self> {
        Self::with_limits(title, year, &Limits::default())
    }
    pub fn with_limits(title: impl Into<String>, year: i32, limits: &Limits) -> Result<Self> {
        let title = title.into();
        validate_text("title", &title, limits)?;
        validate_year_ceiling(year, limits)?;
        Ok(Self {
            title,
            year_published: year,
        })
    }
}
impl Literature for Magazine {
    fn title(&self) -> &str {
        &self.title
    }
    fn year_published(&self) -> i32 {
        self.year_published
    }
    fn kind(&self) -> &'static str {
        "magazine"
    }
}
impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year_published)
    }
}

// ------------- ComicBook -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComicBook {
    title: String,
    #[serde(rename = "year")]
    year_published: i32,
}

impl ComicBook {
    pub fn new(title: impl Into<String>, year: i32) -> Result<Self> {
        Self::with_limits(title, year, &Limits::default())
    }
    pub fn with_limits(title: impl Into<String>, year: i32, limits: &Limits) -> Result<Self> {
        let title = title.into();
        validate_text("title", &title, limits)?;
        validate_year_ceiling(year, limits)?;
        Ok(Self {
            title,
            year_published: year,
        })
    }
}
impl Literature for ComicBook {
    fn title(&self) -> &str {
        &self.title
    }
    fn year_published(&self) -> i32 {
        self.year_published
    }
    fn kind(&self) -> &'static str {
        "comic_book"
    }
}
impl fmt::Display for ComicBook {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year_published)
    }
}

// ------------- LiteraryItem -------------
/// Any cataloged work. Each variant was validated by its own constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LiteraryItem {
    Novel(Novel),
    Magazine(Magazine),
    ComicBook(ComicBook),
}

impl LiteraryItem {
    fn inner(&self) -> &dyn Literature {
        match self {
            LiteraryItem::Novel(novel) => novel,
            LiteraryItem::Magazine(magazine) => magazine,
            LiteraryItem::ComicBook(comic_book) => comic_book,
        }
    }
    pub fn as_novel(&self) -> Option<&Novel> {
        match self {
            LiteraryItem::Novel(novel) => Some(novel),
            _ => None,
        }
    }
}
impl Literature for LiteraryItem {
    fn title(&self) -> &str {
        self.inner().title()
    }
    fn year_published(&self) -> i32 {
        self.inner().year_published()
    }
    fn kind(&self) -> &'static str {
        self.inner().kind()
    }
}
impl fmt::Display for LiteraryItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LiteraryItem::Novel(novel) => write!(f, "{novel}"),
            LiteraryItem::Magazine(magazine) => write!(f, "{magazine}"),
            LiteraryItem::ComicBook(comic_book) => write!(f, "{comic_book}"),
        }
    }
}
impl From<Novel> for LiteraryItem {
    fn from(novel: Novel) -> Self {
        LiteraryItem::Novel(novel)
    }
}
impl From<Magazine> for LiteraryItem {
    fn from(magazine: Magazine) -> Self {
        LiteraryItem::Magazine(magazine)
    }
}
impl From<ComicBook> for LiteraryItem {
    fn from(comic_book: ComicBook) -> Self {
        LiteraryItem::ComicBook(comic_book)
    }
}

// ------------- ItemRecord -------------
/// Unvalidated shape of an item as it appears in a dataset. The only way to turn
/// it into an item is [`ItemRecord::into_item`], which runs the constructors.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemRecord {
    Novel { title: String, author: String, year: i32 },
    Magazine { title: String, year: i32 },
    ComicBook { title: String, year: i32 },
}

impl ItemRecord {
    pub fn into_item(self, limits: &Limits) -> Result<LiteraryItem> {
        Ok(match self {
            ItemRecord::Novel { title, author, year } => {
                Novel::with_limits(title, author, year, limits)?.into()
            }
            ItemRecord::Magazine { title, year } => {
                Magazine::with_limits(title, year, limits)?.into()
            }
            ItemRecord::ComicBook { title, year } => {
                ComicBook::with_limits(title, year, limits)?.into()
            }
        })
    }
}
