//! User-facing strings.
//!
//! Single built-in English table, looked up by dotted key. Unknown keys
//! echo themselves back so a missing entry shows up in the UI instead of
//! rendering blank.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static EN: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("step.title", "Choose Your Skip Size"),
        (
            "step.subtitle",
            "Select the skip size that best suits your needs",
        ),
        ("step.loading", "Loading skips..."),
        (
            "step.empty",
            "No skips available for this area. Please try a different location.",
        ),
        ("step.continue", "Continue"),
        ("step.selected_title", "Skip Selected"),
        (
            "step.selected_size",
            "You've selected a {size} yard skip.",
        ),
        ("card.size_suffix", "Yards"),
        ("card.yard_skip", "Yard Skip"),
        ("card.hire_period", "day hire period"),
        ("card.inc_vat", "inc. VAT"),
        ("card.price_before_vat", "Price before VAT:"),
        ("card.vat", "VAT:"),
        ("card.not_on_road", "Not Allowed On Road"),
        ("card.no_heavy_waste", "Not Suitable for Heavy Waste"),
        ("card.select", "Select This Skip"),
        ("card.selected", "Selected"),
        ("card.unavailable", "Not Available"),
        ("error.title", "Unable to load skips"),
        (
            "error.fallback",
            "There was an error loading skip data. Please try again.",
        ),
        ("error.retry", "Retry"),
        ("not_found.title", "Page not found"),
        (
            "not_found.message",
            "The page you were looking for does not exist.",
        ),
        ("not_found.back", "Back to skip selection"),
    ])
});

/// Look up a user-facing string by key.
#[must_use]
pub fn t(key: &str) -> String {
    EN.get(key).map_or_else(|| key.to_string(), ToString::to_string)
}

/// Look up a string and substitute `{name}` placeholders.
#[must_use]
pub fn t_args(key: &str, args: &[(&str, String)]) -> String {
    let mut out = t(key);
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
