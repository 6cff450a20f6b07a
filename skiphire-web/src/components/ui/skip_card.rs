use skiphire_checkout::Skip;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct SkipCardProps {
    pub skip: Skip,
    pub selected: bool,
    pub on_select: Callback<u32>,
}

/// Image asset for a skip size. Only part of the range has its own photo;
/// the rest reuse the shots the asset set ships.
#[must_use]
pub fn image_source(size: u32) -> String {
    if size == 4 {
        "/16-yard.webp".to_string()
    } else if [5, 6, 8, 10, 12].contains(&size) {
        "/4-yard.webp".to_string()
    } else {
        format!("/{size}-yard.webp")
    }
}

fn action_label(selected: bool, disabled: bool) -> String {
    if disabled {
        i18n::t("card.unavailable")
    } else if selected {
        i18n::t("card.selected")
    } else {
        i18n::t("card.select")
    }
}

fn restriction_notices(skip: &Skip) -> Html {
    html! {
        <div class="restrictions">
            if skip.road_restricted() {
                <p class="warning road">{ i18n::t("card.not_on_road") }</p>
            }
            if !skip.is_selectable() {
                <p class="warning heavy">{ i18n::t("card.no_heavy_waste") }</p>
            }
        </div>
    }
}

/// One catalog entry as a selectable card. Pure rendering of the skip plus
/// the `selected` flag the page derives; the image-loaded flag only settles
/// a CSS class once the product photo has arrived.
#[function_component(SkipCard)]
pub fn skip_card(props: &SkipCardProps) -> Html {
    let image_loaded = use_state(|| false);
    let disabled = !props.skip.is_selectable();
    let selected = props.selected && !disabled;

    let on_click = {
        let on_select = props.on_select.clone();
        let id = props.skip.id;
        Callback::from(move |_| {
            if !disabled {
                on_select.emit(id);
            }
        })
    };

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_| image_loaded.set(true))
    };

    let card_class = classes!(
        "skip-card",
        selected.then_some("selected"),
        disabled.then_some("disabled"),
        (!*image_loaded).then_some("image-pending"),
    );

    let title = format!("{} {}", props.skip.size, i18n::t("card.yard_skip"));

    html! {
      <div
          class={card_class}
          role="button"
          aria-selected={selected.to_string()}
          aria-disabled={disabled.to_string()}
          onclick={on_click}>
        <span class="size-badge">
            { format!("{} {}", props.skip.size, i18n::t("card.size_suffix")) }
        </span>
        <div class="skip-image">
          <img
              src={image_source(props.skip.size)}
              alt={title.clone()}
              loading="lazy"
              onload={on_image_load} />
        </div>
        <div class="skip-details">
          <h3>{ title }</h3>
          <p class="hire-period">
            { format!("{} {}", props.skip.hire_period_days, i18n::t("card.hire_period")) }
          </p>
          <div class="price">
            <span class="total">{ format!("£{}", props.skip.total_price()) }</span>
            <span class="muted">{ i18n::t("card.inc_vat") }</span>
          </div>
          <div class="price-breakdown">
            <div class="line">
              <span>{ i18n::t("card.price_before_vat") }</span>
              <span>{ format!("£{}", props.skip.price_before_vat) }</span>
            </div>
            <div class="line">
              <span>{ i18n::t("card.vat") }</span>
              <span>{ format!("£{}", props.skip.vat) }</span>
            </div>
          </div>
          { restriction_notices(&props.skip) }
          <div class="card-action">{ action_label(selected, disabled) }</div>
        </div>
      </div>
    }
}
