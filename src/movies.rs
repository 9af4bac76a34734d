//! In-memory movie store
//!
//! Holds a fixed list of movies and a query/order filter. The count and the
//! sorted view are derived on every call; memoization is left to callers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A movie record (static seed data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: i32,
    pub rating: f32,
    pub description: String,
    pub image_url: String,
}

/// Title sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// User-controlled query/order pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub query: String,
    pub order: SortOrder,
}

/// Full store state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieState {
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub filter: FilterState,
}

impl Default for MovieState {
    fn default() -> Self {
        Self {
            movies: seed_movies(),
            is_loading: false,
            filter: FilterState::default(),
        }
    }
}

/// The three seed movies
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Inception".into(),
            year: 2010,
            rating: 8.8,
            description:
                "A thief who steals corporate secrets through the use of dream-sharing technology."
                    .into(),
            image_url: "fake".into(),
        },
        Movie {
            id: 2,
            title: "The Matrix".into(),
            year: 1999,
            rating: 8.7,
            description: "A computer hacker learns about the true nature of his reality and his role in the war against its controllers.".into(),
            image_url: "fake".into(),
        },
        Movie {
            id: 3,
            title: "Interstellar".into(),
            year: 2014,
            rating: 8.6,
            description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.".into(),
            image_url: "fake".into(),
        },
    ]
}

/// Movie store with derived values
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    state: MovieState,
}

impl MovieStore {
    pub fn new(state: MovieState) -> Self {
        Self { state }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.state.movies
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn filter(&self) -> &FilterState {
        &self.state.filter
    }

    /// Number of movies, independent of the filter
    pub fn movie_counts(&self) -> usize {
        self.state.movies.len()
    }

    /// Movies sorted by title in the filter's order; the store is untouched
    pub fn sorted_movies(&self) -> Vec<Movie> {
        let mut movies = self.state.movies.clone();
        let order = self.state.filter.order;
        movies.sort_by(|a, b| match order {
            SortOrder::Asc => locale_compare(&a.title, &b.title),
            SortOrder::Desc => locale_compare(&b.title, &a.title),
        });
        movies
    }

    pub fn set_order(&mut self, order: SortOrder) {
        log::debug!("Movie order: {}", order.as_str());
        self.state.filter.order = order;
    }

    pub fn toggle_order(&mut self) {
        self.set_order(self.state.filter.order.reversed());
    }

    /// Store the query. It is displayed but not applied to the list.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.filter.query = query.into();
    }
}

/// Title comparison approximating a browser's `localeCompare` for Latin text.
///
/// Levels, as in a collator: base letters ignoring accents and case, then
/// accents (unaccented first), then case (lowercase first), then code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| {
            let case = |s: &str| s.nfd().map(char::is_uppercase).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
