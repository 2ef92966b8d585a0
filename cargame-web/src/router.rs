use yew_router::prelude::*;

/// Every page of the application. Path parameters are handed to the page
/// unvalidated; the page decides what a malformed id means.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/about")]
    About,
    #[at("/maps")]
    Maps,
    #[at("/cars")]
    Cars,
    #[at("/games")]
    Games,
    #[at("/games/:id")]
    Game { id: String },
    #[at("/carMovements")]
    CarMovements,
    #[at("/run/:id/:name")]
    RunningGame { id: String, name: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Entries of the navigation bar, in display order.
pub const NAVIGATION: [Route; 5] = [
    Route::Maps,
    Route::Cars,
    Route::Games,
    Route::CarMovements,
    Route::About,
];

impl Route {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Root | Self::Maps => "Maps",
            Self::About => "About",
            Self::Cars => "Cars",
            Self::Games => "Games",
            Self::Game { .. } => "Game",
            Self::CarMovements => "Car Movements",
            Self::RunningGame { .. } => "Running Game",
            Self::NotFound => "Not Found",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Maps => Some("fas fa-map"),
            Self::Cars => Some("fas fa-car"),
            Self::Games => Some("fas fa-gamepad"),
            Self::CarMovements => Some("fas fa-flag"),
            Self::Root
            | Self::About
            | Self::Game { .. }
            | Self::RunningGame { .. }
            | Self::NotFound => None,
        }
    }

    /// Where this route sends the browser instead of rendering a page.
    #[must_use]
    pub fn redirect(&self) -> Option<Self> {
        match self {
            Self::Root => Some(Self::Maps),
            _ => None,
        }
    }

    /// The route whose page is actually shown.
    #[must_use]
    pub fn resolve(self) -> Self {
        self.redirect().unwrap_or(self)
    }

    /// Navigation entry highlighted while this route is active.
    #[must_use]
    pub fn section(&self) -> Self {
        match self {
            Self::Game { .. } | Self::RunningGame { .. } => Self::Games,
            other => other.clone().resolve(),
        }
    }
}
