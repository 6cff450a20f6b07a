use yew::prelude::*;

use crate::i18n;

/// Shown while the catalog request is in flight.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="loading" role="status">
            <div class="spinner" aria-hidden="true"></div>
            <p class="muted">{ i18n::t("step.loading") }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_status_copy() {
        let html = block_on(LocalServerRenderer::<LoadingSpinner>::new().render());
        assert!(html.contains("Loading skips..."));
        assert!(html.contains("spinner"));
    }
}
