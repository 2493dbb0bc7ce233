use crate::{
    api::FoodWasteClient,
    components::{error_alert::ErrorAlert, prediction_result::PredictionResultCard},
    models::session::Session,
    services::{
        auth::browser_authenticator,
        in_flight::InFlight,
        prediction::{PredictionForm, PredictionOutcome, submit},
    },
};
use i18nrs::yew::use_translation;
use shared::models::{EventType, PredictionSummary};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

/// Button label while a prediction is in flight.
pub const CALCULATING: &str = "Calculating...";

#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_state(PredictionForm::default);
    let summary = use_state(|| None::<PredictionSummary>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let in_flight = use_mut_ref(|| false);
    let dispatch = use_dispatch::<Session>();

    let onsubmit = {
        let form = form.clone();
        let summary = summary.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let busy = busy.clone();
            let Some(guard) = InFlight::try_begin(&in_flight, move |value| busy.set(value)) else {
                return;
            };
            let values = (*form).clone();
            let summary = summary.clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            error.set(None);
            spawn_local(async move {
                let _guard = guard;
                let outcome = submit(&FoodWasteClient::shared(), &values).await;
                if outcome == PredictionOutcome::SessionExpired {
                    dispatch.set(browser_authenticator().expire());
                }
                error.set(outcome.message().map(ToString::to_string));
                if let PredictionOutcome::Summary(result) = outcome {
                    summary.set(Some(result));
                } else {
                    summary.set(None);
                }
            });
        })
    };

    let on_event_type = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                form.set(PredictionForm {
                    event_type: select.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_expected = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(PredictionForm {
                    expected_attendees: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_actual = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(PredictionForm {
                    actual_attendees: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let is_busy = *busy;

    html! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="card bg-base-100 shadow-lg">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("predict.title")}</h2>
                    <p class="text-base-content/70">{i18n.t("predict.subtitle")}</p>
                    <ErrorAlert message={(*error).clone()} />
                    <div class="form-control">
                        <label class="label" for="event_type">
                            <span class="label-text">{i18n.t("predict.event_type")}</span>
                        </label>
                        <select id="event_type" class="select select-bordered" onchange={on_event_type}>
                            <option value="" selected={form.event_type.is_empty()} disabled=true>
                                {i18n.t("predict.choose_event")}
                            </option>
                            { for EventType::iter().map(|kind| html! {
                                <option value={kind.to_string()} selected={form.event_type == kind.as_ref()}>
                                    {i18n.t(&format!("predict.events.{}", kind.as_ref().to_lowercase()))}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="grid gap-4 md:grid-cols-2">
                        <div class="form-control">
                            <label class="label" for="expected_attendees">
                                <span class="label-text">{i18n.t("predict.expected_attendees")}</span>
                            </label>
                            <input
                                id="expected_attendees"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                step="1"
                                value={form.expected_attendees.clone()}
                                oninput={on_expected}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="actual_attendees">
                                <span class="label-text">{i18n.t("predict.actual_attendees")}</span>
                            </label>
                            <input
                                id="actual_attendees"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                step="1"
                                value={form.actual_attendees.clone()}
                                oninput={on_actual}
                            />
                        </div>
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-success" type="submit" disabled={is_busy}>
                            if is_busy {
                                <span class="loading loading-spinner loading-sm"></span>
                                {CALCULATING}
                            } else {
                                <i class="fas fa-calculator"></i>
                                {i18n.t("predict.submit")}
                            }
                        </button>
                    </div>
                </form>
            </div>
            if let Some(summary) = (*summary).clone() {
                <PredictionResultCard {summary} />
            }
        </div>
    }
}
