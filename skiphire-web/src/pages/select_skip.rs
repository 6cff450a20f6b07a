//! The "choose skip size" page: owns the step state, drives the catalog
//! fetch, and wires selection and continue callbacks into the components.

use std::rc::Rc;

use skiphire_checkout::{FetchPhase, Skip, StepState};
use yew::prelude::*;

use crate::components::ui::error_display::ErrorDisplay;
use crate::components::ui::loading_spinner::LoadingSpinner;
use crate::components::ui::selection_bar::SelectionBar;
use crate::components::ui::skip_card::SkipCard;
use crate::i18n;

#[cfg(target_arch = "wasm32")]
use skiphire_checkout::{DEFAULT_BASE_URL, Location};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectSkipPageProps {
    pub postcode: AttrValue,
    pub area: AttrValue,
    /// Hand-off to the next step; emitted only with a valid selection.
    pub on_continue: Callback<Skip>,
}

/// Actions the page dispatches into the step state. Fetch resolutions carry
/// the token of the request they answer; the state machine discards stale
/// ones.
enum StepAction {
    Begin { token: u64 },
    Loaded { token: u64, skips: Vec<Skip> },
    Failed { token: u64, message: String },
    Select { id: u32 },
}

struct Step(StepState);

impl Reducible for Step {
    type Action = StepAction;

    fn reduce(self: Rc<Self>, action: StepAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            StepAction::Begin { token } => next.begin_fetch(token),
            StepAction::Loaded { token, skips } => {
                if !next.resolve_success(token, skips) {
                    log::warn!("discarding stale catalog response");
                }
            }
            StepAction::Failed { token, message } => {
                if !next.resolve_failure(token, message) {
                    log::warn!("discarding stale catalog failure");
                }
            }
            StepAction::Select { id } => next.select(id),
        }
        Rc::new(Self(next))
    }
}

fn catalog_view(state: &StepState, on_select: &Callback<u32>, on_retry: &Callback<()>) -> Html {
    match state.phase() {
        FetchPhase::Idle => Html::default(),
        FetchPhase::Loading => html! { <LoadingSpinner /> },
        FetchPhase::Failed => {
            let message = state.error_message().unwrap_or_default().to_string();
            html! {
                <ErrorDisplay message={AttrValue::from(message)} on_retry={on_retry.clone()} />
            }
        }
        FetchPhase::Loaded if state.skips().is_empty() => html! {
            <div class="empty-state">
                <p class="muted">{ i18n::t("step.empty") }</p>
            </div>
        },
        FetchPhase::Loaded => {
            let selected_id = state.selection().id();
            html! {
                <div class="skips-grid">
                    { for state.skips().iter().map(|skip| html! {
                        <SkipCard
                            key={skip.id}
                            skip={skip.clone()}
                            selected={Some(skip.id) == selected_id}
                            on_select={on_select.clone()} />
                    }) }
                </div>
            }
        }
    }
}

fn continue_controls(state: &StepState, on_continue: &Callback<()>) -> Html {
    if let Some(skip) = state.selected_skip() {
        html! { <SelectionBar skip={skip.clone()} on_continue={on_continue.clone()} /> }
    } else if state.skips().is_empty() {
        Html::default()
    } else {
        html! {
            <div class="controls">
                <button type="button" class="continue" disabled={true}>
                    { i18n::t("step.continue") }
                </button>
            </div>
        }
    }
}

#[function_component(SelectSkipPage)]
pub fn select_skip_page(props: &SelectSkipPageProps) -> Html {
    let step = use_reducer(|| Step(StepState::new()));

    #[cfg(target_arch = "wasm32")]
    let fetch_seq = use_mut_ref(|| 0_u64);

    // Fetch on mount and again whenever the location parameters change.
    #[cfg(target_arch = "wasm32")]
    {
        let step = step.clone();
        let fetch_seq = fetch_seq.clone();
        use_effect_with(
            (props.postcode.clone(), props.area.clone()),
            move |(postcode, area)| {
                let location = Location::new(postcode.to_string(), area.to_string());
                start_fetch(&step, &fetch_seq, location);
                || {}
            },
        );
    }

    let on_select = {
        let step = step.clone();
        Callback::from(move |id: u32| step.dispatch(StepAction::Select { id }))
    };

    let on_retry = {
        let step = step.clone();
        let postcode = props.postcode.clone();
        let area = props.area.clone();
        #[cfg(target_arch = "wasm32")]
        {
            let fetch_seq = fetch_seq.clone();
            Callback::from(move |()| {
                let location = Location::new(postcode.to_string(), area.to_string());
                start_fetch(&step, &fetch_seq, location);
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (step, postcode, area);
            Callback::from(|()| {})
        }
    };

    let on_continue = {
        let step = step.clone();
        let cb = props.on_continue.clone();
        Callback::from(move |()| {
            if let Some(skip) = step.0.selected_skip() {
                cb.emit(skip.clone());
            }
        })
    };

    html! {
        <section class="panel select-skip" aria-labelledby="select-skip-title">
            <header class="section-header">
                <h1 id="select-skip-title">{ i18n::t("step.title") }</h1>
                <p class="muted">{ i18n::t("step.subtitle") }</p>
            </header>
            { catalog_view(&step.0, &on_select, &on_retry) }
            { continue_controls(&step.0, &on_continue) }
        </section>
    }
}

#[cfg(target_arch = "wasm32")]
fn start_fetch(
    step: &UseReducerHandle<Step>,
    fetch_seq: &Rc<RefCell<u64>>,
    location: Location,
) {
    let token = {
        let mut seq = fetch_seq.borrow_mut();
        *seq += 1;
        *seq
    };
    step.dispatch(StepAction::Begin { token });

    let step = step.clone();
    spawn_local(async move {
        match crate::catalog::fetch_skips(DEFAULT_BASE_URL, &location).await {
            Ok(catalog) => step.dispatch(StepAction::Loaded {
                token,
                skips: catalog.0,
            }),
            Err(err) => {
                crate::dom::console_error(&format!("Failed to fetch skips: {err}"));
                step.dispatch(StepAction::Failed {
                    token,
                    message: err.user_message(),
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn skip(id: u32, heavy: bool) -> Skip {
        Skip {
            id,
            size: 4,
            hire_period_days: 14,
            price_before_vat: 200.0,
            vat: 40.0,
            allowed_on_road: true,
            allows_heavy_waste: heavy,
        }
    }

    fn loaded(skips: Vec<Skip>) -> StepState {
        let mut state = StepState::new();
        state.begin_fetch(1);
        assert!(state.resolve_success(1, skips));
        state
    }

    fn reduce(step: Step, action: StepAction) -> Step {
        let next = Rc::new(step).reduce(action);
        Step(next.0.clone())
    }

    #[derive(Properties, PartialEq, Clone)]
    struct HarnessProps {
        state: StepState,
    }

    #[function_component(CatalogViewHarness)]
    fn catalog_view_harness(props: &HarnessProps) -> Html {
        catalog_view(&props.state, &Callback::noop(), &Callback::noop())
    }

    #[function_component(ContinueControlsHarness)]
    fn continue_controls_harness(props: &HarnessProps) -> Html {
        continue_controls(&props.state, &Callback::noop())
    }

    fn render_view(state: StepState) -> String {
        let props = HarnessProps { state };
        block_on(LocalServerRenderer::<CatalogViewHarness>::with_props(props).render())
    }

    fn render_controls(state: StepState) -> String {
        let props = HarnessProps { state };
        block_on(LocalServerRenderer::<ContinueControlsHarness>::with_props(props).render())
    }

    #[test]
    fn reducer_applies_the_fetch_lifecycle() {
        let step = Step(StepState::new());
        let step = reduce(step, StepAction::Begin { token: 1 });
        assert_eq!(step.0.phase(), FetchPhase::Loading);

        let step = reduce(
            step,
            StepAction::Loaded {
                token: 1,
                skips: vec![skip(1, true)],
            },
        );
        assert_eq!(step.0.phase(), FetchPhase::Loaded);
        assert_eq!(step.0.skips().len(), 1);
    }

    #[test]
    fn reducer_discards_stale_resolutions() {
        let step = Step(StepState::new());
        let step = reduce(step, StepAction::Begin { token: 1 });
        let step = reduce(step, StepAction::Begin { token: 2 });
        let step = reduce(
            step,
            StepAction::Failed {
                token: 1,
                message: "Error: 500 - Internal Server Error".to_string(),
            },
        );
        assert_eq!(step.0.phase(), FetchPhase::Loading);

        let step = reduce(
            step,
            StepAction::Loaded {
                token: 2,
                skips: vec![skip(2, true)],
            },
        );
        assert_eq!(step.0.phase(), FetchPhase::Loaded);
        assert_eq!(step.0.skips()[0].id, 2);
    }

    #[test]
    fn reducer_toggles_selection() {
        let step = Step(loaded(vec![skip(1, true)]));
        let step = reduce(step, StepAction::Select { id: 1 });
        assert!(step.0.can_continue());
        let step = reduce(step, StepAction::Select { id: 1 });
        assert!(!step.0.can_continue());
    }

    #[test]
    fn loading_state_renders_the_spinner() {
        let mut state = StepState::new();
        state.begin_fetch(1);
        let html = render_view(state);
        assert!(html.contains("Loading skips..."));
    }

    #[test]
    fn failed_state_renders_the_error_panel() {
        let mut state = StepState::new();
        state.begin_fetch(1);
        state.resolve_failure(1, "Error: 500 - Internal Server Error");
        let html = render_view(state);
        assert!(html.contains("500"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn empty_catalog_renders_the_empty_state() {
        let html = render_view(loaded(vec![]));
        assert!(html.contains("No skips available for this area"));
        assert!(!html.contains("skip-card"));
    }

    #[test]
    fn loaded_catalog_renders_one_card_per_skip() {
        let html = render_view(loaded(vec![skip(1, true), skip(2, false)]));
        assert_eq!(html.matches("skip-card").count(), 2);
        assert!(html.contains("skip-card disabled"));
    }

    #[test]
    fn controls_stay_disabled_without_a_selection() {
        let html = render_controls(loaded(vec![skip(1, true)]));
        assert!(html.contains("disabled"));
        assert!(!html.contains("selection-bar"));
    }

    #[test]
    fn selection_bar_appears_with_a_selection() {
        let mut state = loaded(vec![skip(1, true)]);
        state.select(1);
        let html = render_controls(state);
        assert!(html.contains("selection-bar"));
        assert!(html.contains("£240"));
    }

    #[test]
    fn empty_catalog_renders_no_controls() {
        let html = render_controls(loaded(vec![]));
        assert!(!html.contains("selection-bar"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn page_renders_the_step_heading() {
        let props = SelectSkipPageProps {
            postcode: AttrValue::from("NR32"),
            area: AttrValue::from("Lowestoft"),
            on_continue: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SelectSkipPage>::with_props(props).render());
        assert!(html.contains("Choose Your Skip Size"));
        assert!(html.contains("Select the skip size that best suits your needs"));
    }
}
