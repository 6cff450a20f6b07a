use skiphire_checkout::Skip;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectionBarProps {
    pub skip: Skip,
    pub on_continue: Callback<()>,
}

/// Summary bar for the current selection: size, VAT-inclusive price, and
/// the continue action. Rendered only while a selection resolves.
#[function_component(SelectionBar)]
pub fn selection_bar(props: &SelectionBarProps) -> Html {
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="selection-bar">
            <div class="selection-summary">
                <h3>{ format!("{} {}", props.skip.size, i18n::t("card.yard_skip")) }</h3>
                <p class="price">{ format!("£{}", props.skip.total_price()) }</p>
            </div>
            <button type="button" class="continue" onclick={on_continue}>
                { i18n::t("step.continue") }
            </button>
        </div>
    }
}
