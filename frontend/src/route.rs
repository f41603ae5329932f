/// Top-level pages, chosen by URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Home,
    Error,
    Status,
    Privacy,
    Terms,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/home" => Route::Home,
            "/error" => Route::Error,
            "/status" => Route::Status,
            "/privacy" => Route::Privacy,
            "/terms" => Route::Terms,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Home => "/home",
            Route::Error => "/error",
            Route::Status => "/status",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::NotFound => "/404",
        }
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Landing)
}

/// Full page navigation.
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(route.path()).is_err() {
            log::error!("navigation to {} failed", route.path());
        }
    }
}

/// Panels of the home shell, chosen by `location.hash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Overview,
    Transactions,
    Add,
    Reports,
    Budget,
    Goals,
    Profile,
    Groups,
}

impl View {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "transactions" => View::Transactions,
            "add" => View::Add,
            "reports" => View::Reports,
            "budget" => View::Budget,
            "goals" => View::Goals,
            "profile" => View::Profile,
            "groups" => View::Groups,
            _ => View::Overview,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Transactions => "transactions",
            View::Add => "add",
            View::Reports => "reports",
            View::Budget => "budget",
            View::Goals => "goals",
            View::Profile => "profile",
            View::Groups => "groups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Transactions => "Transactions",
            View::Add => "Add",
            View::Reports => "Reports",
            View::Budget => "Budget",
            View::Goals => "Goals",
            View::Profile => "Profile",
            View::Groups => "Groups",
        }
    }
}

pub fn current_view() -> View {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| View::from_hash(&hash))
        .unwrap_or(View::Overview)
}

/// The hash to write for `view`, or `None` when the location already shows it.
fn hash_update(current: Option<&str>, view: View) -> Option<&'static str> {
    let current = current.map(|hash| hash.trim_start_matches('#'));
    (current != Some(view.hash())).then(|| view.hash())
}

pub fn set_view_hash(view: View) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Some(hash) = hash_update(location.hash().ok().as_deref(), view) {
            if location.set_hash(hash).is_err() {
                log::error!("updating location hash to #{} failed", hash);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/home"), Route::Home);
        assert_eq!(Route::from_path("/home/"), Route::Home);
        assert_eq!(Route::from_path("/error"), Route::Error);
        assert_eq!(Route::from_path("/status"), Route::Status);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn every_known_route_round_trips_through_its_path() {
        for route in [
            Route::Landing,
            Route::Home,
            Route::Error,
            Route::Status,
            Route::Privacy,
            Route::Terms,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn empty_or_unknown_hash_is_overview() {
        assert_eq!(View::from_hash(""), View::Overview);
        assert_eq!(View::from_hash("#"), View::Overview);
        assert_eq!(View::from_hash("#settings"), View::Overview);
        assert_eq!(View::from_hash("#budget"), View::Budget);
        assert_eq!(View::from_hash("goals"), View::Goals);
    }

    #[test]
    fn hash_is_only_rewritten_when_it_differs() {
        assert_eq!(hash_update(Some("#budget"), View::Budget), None);
        assert_eq!(hash_update(Some("#goals"), View::Budget), Some("budget"));
        assert_eq!(hash_update(Some(""), View::Overview), Some("overview"));
        assert_eq!(hash_update(None, View::Groups), Some("groups"));
    }
}
