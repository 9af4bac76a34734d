//! HTML builders for the views
//!
//! Pure string builders so the markup can be tested without a browser. All
//! user-visible text goes through [`escape_html`].

use std::fmt::Write as _;

use crate::court::CourtParameters;
use crate::movies::MovieStore;
use crate::router::Route;
use crate::settings::SliderRange;

/// Element ids shared with the browser entry point
pub mod ids {
    pub const OUTLET: &str = "outlet";
    pub const MOVIE_LIST: &str = "movie-list";
    pub const BOARD_CONTAINER: &str = "board-container";
    pub const BOARD_CANVAS: &str = "board-canvas";
    pub const ORDER_TOGGLE: &str = "order-toggle";
    pub const QUERY_INPUT: &str = "query-input";
}

/// One slider of the board configuration card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    PixelsPerMeter,
    Height,
    Width,
}

impl BoardInput {
    pub const ALL: [BoardInput; 3] = [
        BoardInput::PixelsPerMeter,
        BoardInput::Height,
        BoardInput::Width,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BoardInput::PixelsPerMeter => "pixelsPerMeter",
            BoardInput::Height => "height",
            BoardInput::Width => "width",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoardInput::PixelsPerMeter => "Pixels per meter",
            BoardInput::Height => "Height (meters)",
            BoardInput::Width => "Width (meters)",
        }
    }

    pub fn value(&self, params: &CourtParameters) -> f32 {
        match self {
            BoardInput::PixelsPerMeter => params.pixels_per_meter,
            BoardInput::Height => params.height_meters,
            BoardInput::Width => params.width_meters,
        }
    }

    /// Parameters with this input set to `value` (clamped)
    pub fn apply(&self, params: CourtParameters, value: f32) -> CourtParameters {
        match self {
            BoardInput::PixelsPerMeter => params.with_pixels_per_meter(value),
            BoardInput::Height => params.with_height_meters(value),
            BoardInput::Width => params.with_width_meters(value),
        }
    }

    /// Label text including the current value, e.g. "Height (meters): 30"
    pub fn label_text(&self, params: &CourtParameters) -> String {
        format!("{}: {}", self.label(), format_slider_label(self.value(params)))
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id())
    }
}

/// Slider thumb label
pub fn format_slider_label(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Navigation bar with one link per route
pub fn nav_html() -> String {
    let mut html = String::from("<nav>");
    for route in Route::ALL {
        let _ = write!(
            html,
            "<a href=\"{}\">{}</a>",
            route.href(),
            escape_html(route.title())
        );
    }
    html.push_str("</nav>");
    html
}

/// Movie list view
pub fn movie_list_html(store: &MovieStore) -> String {
    let mut html = String::new();
    let _ = write!(html, "<p>Loading: {}</p>", store.is_loading());

    for movie in store.movies() {
        let title = escape_html(&movie.title);
        let _ = write!(
            html,
            "<div data-movie-id=\"{}\"><h3>{title} ({})</h3><p>Rating: {}</p><p>{}</p><img src=\"{}\" alt=\"{title}\" /></div>",
            movie.id,
            movie.year,
            movie.rating,
            escape_html(&movie.description),
            escape_html(&movie.image_url),
        );
    }

    let filter = store.filter();
    let filter_json = serde_json::to_string_pretty(filter).unwrap_or_default();
    let _ = write!(html, "<p>Filter:</p><pre>{}</pre>", escape_html(&filter_json));
    let _ = write!(html, "<p>Count: {}</p>", store.movie_counts());

    html.push_str("<ol class=\"sorted\">");
    for movie in store.sorted_movies() {
        let _ = write!(html, "<li>{}</li>", escape_html(&movie.title));
    }
    html.push_str("</ol>");

    let _ = write!(html, "<p>Query {}</p>", escape_html(&filter.query));
    let _ = write!(html, "<p>Order {}</p>", filter.order.as_str());
    html
}

/// Movie view: the list section (re-rendered on filter changes) followed by
/// the filter controls (rendered once)
pub fn movie_view_html(store: &MovieStore) -> String {
    format!(
        "<div id=\"{}\">{}</div><input id=\"{}\" type=\"text\" placeholder=\"Query\" value=\"{}\" /><button id=\"{}\">Toggle order</button>",
        ids::MOVIE_LIST,
        movie_list_html(store),
        ids::QUERY_INPUT,
        escape_html(&store.filter().query),
        ids::ORDER_TOGGLE,
    )
}

/// Board configuration card plus the canvas container
pub fn board_controls_html(params: &CourtParameters, slider: &SliderRange) -> String {
    let mut html = String::from(
        "<div class=\"tactical-board-container\"><div class=\"controls-card\"><h2>Board Configuration</h2><div class=\"controls-content\">",
    );
    for input in BoardInput::ALL {
        let _ = write!(
            html,
            "<label id=\"{}\" for=\"{}\">{}</label><input id=\"{}\" type=\"range\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" />",
            input.label_id(),
            input.id(),
            escape_html(&input.label_text(params)),
            input.id(),
            format_slider_label(slider.min),
            format_slider_label(slider.max),
            format_slider_label(slider.step),
            format_slider_label(input.value(params)),
        );
    }
    let _ = write!(
        html,
        "</div></div><div id=\"{}\" class=\"konva-container\"></div></div>",
        ids::BOARD_CONTAINER
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::{Movie, MovieState};

    #[test]
    fn test_nav_lists_routes() {
        let html = nav_html();
        assert!(html.contains("<a href=\"#/home\">Home</a>"));
        assert!(html.contains("<a href=\"#/tactical-board\">Tactical Board</a>"));
    }

    #[test]
    fn test_movie_list_shows_store() {
        let html = movie_list_html(&MovieStore::default());
        assert!(html.starts_with("<p>Loading: false</p>"));
        assert!(html.contains("<h3>Inception (2010)</h3>"));
        assert!(html.contains("<p>Rating: 8.8</p>"));
        assert!(html.contains("<p>Count: 3</p>"));
        assert!(html.contains("<p>Order asc</p>"));
        assert!(html.contains("&quot;order&quot;: &quot;asc&quot;"));
        // Store order, not sorted order
        let inception = html.find("Inception").unwrap();
        let matrix = html.find("The Matrix").unwrap();
        let interstellar = html.find("Interstellar").unwrap();
        assert!(inception < matrix && matrix < interstellar);
        assert!(html.contains(
            "<ol class=\"sorted\"><li>Inception</li><li>Interstellar</li><li>The Matrix</li></ol>"
        ));
    }

    #[test]
    fn test_movie_list_escapes_titles() {
        let mut state = MovieState::default();
        state.movies = vec![Movie {
            id: 9,
            title: "<script>alert(1)</script>".into(),
            year: 2000,
            rating: 1.0,
            description: "Tom & Jerry".into(),
            image_url: "x\" onerror=\"y".into(),
        }];
        let html = movie_list_html(&MovieStore::new(state));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("src=\"x&quot; onerror=&quot;y\""));
    }

    #[test]
    fn test_movie_view_wraps_list() {
        let html = movie_view_html(&MovieStore::default());
        assert!(html.starts_with("<div id=\"movie-list\"><p>Loading: false</p>"));
        assert!(html.contains("id=\"query-input\""));
        assert!(html.ends_with("<button id=\"order-toggle\">Toggle order</button>"));
    }

    #[test]
    fn test_board_controls_labels() {
        let html = board_controls_html(&CourtParameters::default(), &SliderRange::default());
        assert!(html.contains(">Pixels per meter: 20</label>"));
        assert!(html.contains(">Height (meters): 30</label>"));
        assert!(html.contains(">Width (meters): 20</label>"));
        assert!(html.contains("min=\"1\" max=\"40\" step=\"1\""));
        assert!(html.contains("id=\"board-container\""));
    }

    #[test]
    fn test_board_input_apply_clamps() {
        let params = BoardInput::Height.apply(CourtParameters::default(), 99.0);
        assert_eq!(params.height_meters, 40.0);
        assert_eq!(BoardInput::Height.label_text(&params), "Height (meters): 40");
    }

    #[test]
    fn test_format_slider_label() {
        assert_eq!(format_slider_label(12.0), "12");
        assert_eq!(format_slider_label(1.5), "1.5");
    }
}
