//! Route table shared with the presentation layer.

/// Site name shown in the navigation header.
pub const BRAND: &str = "WALRAVENS";

/// Top-level site routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    About,
}

/// Navigation entries in display order.
pub const NAVIGATION: [Route; 3] = [Route::Home, Route::Projects, Route::About];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::About => "/about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
        }
    }
}

/// Detail page path for one project, e.g. `/projects/my-site`.
pub fn project_path(slug: &str) -> String {
    format!("{}/{slug}", Route::Projects.path())
}
