//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders its form, reads the field values on submit and hands
//! them to the matching flow in `crate::flows`. [`PageKind`] names the pages
//! and their paths for the router and for navigation.


pub mod dashboard;
pub mod login;
pub mod register;

/// The pages of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Register,
    Login,
    Dashboard,
}

impl PageKind {
    pub const ALL: [Self; 3] = [Self::Register, Self::Login, Self::Dashboard];

    /// Router path segment.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }

    /// Absolute path used for navigation.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Resolve a request path, including the static `.html` pages the app
    /// used to be served as.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let name = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let name = name.strip_suffix(".html").unwrap_or(name);
        match name {
            "" | "index" | "register" => Some(Self::Register),
            "login" => Some(Self::Login),
            "dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}
