//! # Result Presenter
//!
//! Turns a [`SearchState`] into a [`Page`]. Rendering is a pure function of the
//! state plus the seeds used for card colors:
//!
//! - while loading, [`LOADING_MESSAGE`] and a grid of [`SKELETON_CELLS`] placeholders
//! - otherwise, if an error is set, the error line alone
//! - otherwise, one [`RecipeCard`] per result, in order

pub mod color;

use serde::Serialize;

use crate::client::types::Recipe;
use crate::search::state::SearchState;

pub use color::{accent_color, AccentColor, FixedSeeds, RandomSeeds, SeedSource};

pub const SKELETON_CELLS: usize = 9;

pub const PAGE_TITLE: &str = "Recommended Recipes";
pub const PAGE_SUBTITLE: &str = "Popular choices";
pub const SEARCH_PLACEHOLDER: &str = "What do you want to cook today?";
pub const LOADING_MESSAGE: &str = "Loading recipes...";

/// Everything a host needs to draw the search view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    /// Query the view is showing, if any search ran
    pub query: Option<String>,
    pub body: View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Loading {
        message: &'static str,
        placeholders: Vec<SkeletonCell>,
    },
    Error { message: String },
    Grid { cards: Vec<RecipeCard> },
}

impl View {
    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            View::Grid { cards } => cards.as_slice(),
            _ => &[],
        }
    }
}

/// One placeholder cell: an image block and three text bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkeletonCell {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    /// Position in the result list
    pub index: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cuisine: Vec<String>,
    /// At most two labels fit on a card
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<u32>,
    pub ingredient_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    pub accent: AccentColor,
}

impl RecipeCard {
    pub fn new(index: usize, recipe: &Recipe, accent: AccentColor) -> Self {
        Self {
            index,
            label: recipe.label.clone(),
            image: recipe.image.clone(),
            source: recipe.source.clone(),
            url: recipe.url.clone(),
            cuisine: recipe.cuisine_type.clone(),
            health_labels: recipe.health_labels.iter().take(2).cloned().collect(),
            calories_per_serving: recipe
                .calories_per_serving()
                .map(|calories| calories.round() as u32),
            ingredient_count: recipe.ingredient_count(),
            total_time_minutes: recipe
                .total_time
                .filter(|minutes| *minutes > 0.0)
                .map(|minutes| minutes.round() as u32),
            accent,
        }
    }
}

/// Renders with fresh random card colors.
pub fn render(state: &SearchState) -> Page {
    render_with(state, &mut RandomSeeds::new())
}

pub fn render_with(state: &SearchState, seeds: &mut impl SeedSource) -> Page {
    Page {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        search_placeholder: SEARCH_PLACEHOLDER,
        query: state.query.clone(),
        body: render_body(state, seeds),
    }
}

fn render_body(state: &SearchState, seeds: &mut impl SeedSource) -> View {
    if state.loading {
        return View::Loading {
            message: LOADING_MESSAGE,
            placeholders: (0..SKELETON_CELLS).map(|index| SkeletonCell { index }).collect(),
        };
    }

    if let Some(message) = &state.error {
        return View::Error {
            message: message.clone(),
        };
    }

    let cards = state
        .results
        .iter()
        .enumerate()
        .map(|(index, recipe)| RecipeCard::new(index, recipe, accent_color(seeds.seed_for(index))))
        .collect();
    View::Grid { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::state::{SearchPhase, NO_RESULTS_MESSAGE};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn recipe(label: &str) -> Recipe {
        Recipe::from_json(json!({ "label": label })).unwrap()
    }

    #[test]
    fn loading_shows_nine_placeholders() {
        let mut state = SearchState::loading("chicken");
        // Loading wins over anything else in the state.
        state.error = Some("ignored".to_string());
        state.results = vec![recipe("ignored")];

        let page = render(&state);
        match page.body {
            View::Loading {
                message,
                placeholders,
            } => {
                assert_eq!(message, LOADING_MESSAGE);
                assert_eq!(placeholders.len(), SKELETON_CELLS);
            }
            other => panic!("expected loading view, got {:?}", other),
        }
    }

    #[test]
    fn error_hides_cards() {
        let mut state = SearchState::failed("chicken", "Failed with status 500".to_string());
        state.results = vec![recipe("stale")];

        let page = render(&state);
        assert_eq!(
            page.body,
            View::Error {
                message: "Failed with status 500".to_string()
            }
        );
        assert!(page.body.cards().is_empty());
    }

    #[test]
    fn empty_result_renders_as_error_line() {
        let state = SearchState::empty("zzzznotfood");
        assert_eq!(state.phase, SearchPhase::Empty);
        assert_eq!(
            render(&state).body,
            View::Error {
                message: NO_RESULTS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn cards_follow_result_order() {
        let state = SearchState::success("chicken", vec![recipe("A"), recipe("B"), recipe("C")]);
        let page = render(&state);

        let labels: Vec<&str> = page.body.cards().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        let indexes: Vec<usize> = page.body.cards().iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(page.query.as_deref(), Some("chicken"));
        assert_eq!(page.title, PAGE_TITLE);
    }

    #[test]
    fn fixed_seeds_render_identically() {
        let state = SearchState::success("chicken", vec![recipe("A"), recipe("B")]);
        let first = render_with(&state, &mut FixedSeeds(99));
        let second = render_with(&state, &mut FixedSeeds(99));
        assert_eq!(first, second);
    }

    #[test]
    fn idle_state_renders_empty_grid() {
        let page = render(&SearchState::default());
        assert_eq!(page.body, View::Grid { cards: vec![] });
        assert_eq!(page.query, None);
    }

    #[test]
    fn card_summarises_recipe() {
        let recipe = Recipe::from_json(json!({
            "label": "Roast Chicken",
            "image": "https://example.com/chicken.jpg",
            "yield": 4.0,
            "calories": 2002.0,
            "totalTime": 0.0,
            "healthLabels": ["A", "B", "C"],
            "ingredientLines": ["1 chicken", "salt"]
        }))
        .unwrap();
        let accent = accent_color(3);
        let card = RecipeCard::new(0, &recipe, accent);

        assert_eq!(card.health_labels, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(card.calories_per_serving, Some(501));
        assert_eq!(card.ingredient_count, 2);
        assert_eq!(card.total_time_minutes, None);
        assert_eq!(card.accent, accent);
    }
}
