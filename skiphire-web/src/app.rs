//! App shell: route switching, the location parameters the flow arrived
//! with, and the continue hand-off seam where the next step would attach.

use skiphire_checkout::Skip;

use crate::i18n;

#[cfg(target_arch = "wasm32")]
use crate::pages::not_found::NotFound;
#[cfg(target_arch = "wasm32")]
use crate::pages::select_skip::SelectSkipPage;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use skiphire_checkout::Location;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Live-region announcement for a confirmed selection. Content is the size
/// and nothing else; the next-step collaborator receives the full record.
fn selection_announcement(skip: &Skip) -> String {
    format!(
        "{} {}",
        i18n::t("step.selected_title"),
        i18n::t_args("step.selected_size", &[("size", skip.size.to_string())]),
    )
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::SelectSkip => html! { <SelectSkipShell /> },
        Route::NotFound => html! { <NotFoundShell /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(SelectSkipShell)]
fn select_skip_shell() -> Html {
    // The earlier steps of the flow would deliver these; deployed
    // standalone, the step starts from the shipped defaults.
    let location = use_state(Location::default);

    let on_continue = Callback::from(|skip: Skip| {
        crate::a11y::set_status(&selection_announcement(&skip));
        log::info!("continue with skip id {}", skip.id);
    });

    html! {
        <>
            <SelectSkipPage
                postcode={AttrValue::from(location.postcode.clone())}
                area={AttrValue::from(location.area.clone())}
                on_continue={on_continue} />
            <p id="status-helper" aria-live="polite" class="muted"></p>
        </>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(NotFoundShell)]
fn not_found_shell() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.clone() {
            nav.push(&Route::SelectSkip);
        }
    });
    html! { <NotFound on_go_home={on_go_home} /> }
}
