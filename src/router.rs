//! Client-side routes
//!
//! The empty path redirects to `home`; any unknown path redirects to the empty
//! path and therefore also lands on `home`.

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Movie list
    Home,
    /// Handball court drawing board
    TacticalBoard,
}

impl Route {
    /// Routes in navigation order
    pub const ALL: [Route; 2] = [Route::Home, Route::TacticalBoard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::TacticalBoard => "tactical-board",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::TacticalBoard => "Tactical Board",
        }
    }

    /// Hash fragment used for links, e.g. `#/home`
    pub fn href(&self) -> String {
        format!("#/{}", self.path())
    }

    /// Resolve a location path or hash (`home`, `/home`, `#/home`) to a route,
    /// following redirects.
    pub fn resolve(path: &str) -> Route {
        let path = path.trim_start_matches('#').trim_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match Self::match_path(path) {
            Some(route) => route,
            // '' -> home, '**' -> ''
            None => {
                log::debug!("No route for '{}', redirecting to ''", path);
                Route::Home
            }
        }
    }

    fn match_path(path: &str) -> Option<Route> {
        match path {
            "" => Some(Route::Home),
            _ => Self::ALL.into_iter().find(|route| route.path() == path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("home"), Route::Home);
        assert_eq!(Route::resolve("/tactical-board"), Route::TacticalBoard);
        assert_eq!(Route::resolve("#/tactical-board"), Route::TacticalBoard);
        assert_eq!(Route::resolve("#/home?x=1"), Route::Home);
    }

    #[test]
    fn test_empty_redirects_home() {
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("#/"), Route::Home);
    }

    #[test]
    fn test_unknown_redirects_home() {
        assert_eq!(Route::resolve("/nowhere"), Route::Home);
        assert_eq!(Route::resolve("#/home/deeper"), Route::Home);
    }

    #[test]
    fn test_href_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(&route.href()), route);
        }
    }
}
