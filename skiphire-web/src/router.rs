use yew_router::prelude::*;

/// Route table for the checkout front end. The skip-size step is the only
/// step this deployment serves; everything else falls through to 404.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    SelectSkip,
    #[at("/404")]
    #[not_found]
    NotFound,
}
