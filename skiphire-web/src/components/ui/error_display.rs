use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorDisplayProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

/// Shown when the catalog fetch failed. The message comes normalized from
/// the page; retry hands control back to it.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    let on_retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let message = if props.message.is_empty() {
        i18n::t("error.fallback")
    } else {
        props.message.to_string()
    };

    html! {
        <div class="error-panel" role="alert">
            <h3>{ i18n::t("error.title") }</h3>
            <p class="error-message">{ message }</p>
            <button type="button" onclick={on_retry}>{ i18n::t("error.retry") }</button>
        </div>
    }
}
