use crate::{
    api::FoodWasteClient,
    components::{charity_card::CharityCard, loading::Loading},
    config::FrontendConfig,
    models::session::Session,
    services::{
        auth::browser_authenticator,
        charity::{CharityListing, search, search_location},
        geolocation::current_position,
        in_flight::InFlight,
    },
};
use i18nrs::yew::use_translation;
use shared::models::CharitySearch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

#[derive(Properties, PartialEq)]
pub struct CharityResultsProps {
    pub listing: CharityListing,
}

/// Cards for a listing, or the listing's message in their place.
#[function_component(CharityResults)]
pub fn charity_results(props: &CharityResultsProps) -> Html {
    if let Some(message) = props.listing.message() {
        let class = if matches!(
            props.listing,
            CharityListing::Failed(_) | CharityListing::SessionExpired
        ) {
            "alert alert-warning"
        } else {
            "text-center text-base-content/70 charity-empty"
        };
        return html! { <div class={class} role="status"><span>{message.to_string()}</span></div> };
    }
    let CharityListing::Results(charities) = &props.listing else {
        return html! {};
    };
    html! {
        <div class="grid gap-4 md:grid-cols-2 charities-list">
            { for charities.iter().map(|charity| html! {
                <CharityCard charity={charity.clone()} />
            }) }
        </div>
    }
}

#[function_component(CharitiesPage)]
pub fn charities_page() -> Html {
    let (i18n, ..) = use_translation();
    let location = use_state(String::new);
    let listing = use_state(CharityListing::default);
    let busy = use_state(|| false);
    // One flag for both search paths.
    let in_flight = use_mut_ref(|| false);
    let dispatch = use_dispatch::<Session>();

    let show = {
        let listing = listing.clone();
        move |result: CharityListing| {
            if result == CharityListing::SessionExpired {
                dispatch.set(browser_authenticator().expire());
            }
            listing.set(result);
        }
    };

    let begin = {
        let busy = busy.clone();
        move |flag: &Rc<RefCell<bool>>| {
            let busy = busy.clone();
            InFlight::try_begin(flag, move |value| busy.set(value))
        }
    };

    let on_search = {
        let location = location.clone();
        let in_flight = in_flight.clone();
        let begin = begin.clone();
        let show = show.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(guard) = begin(&in_flight) else {
                return;
            };
            let query = (*location).clone();
            let show = show.clone();
            spawn_local(async move {
                let _guard = guard;
                let result = search_location(&FoodWasteClient::shared(), &query).await;
                show(result);
            });
        })
    };

    let on_use_location = {
        Callback::from(move |_: MouseEvent| {
            let Some(guard) = begin(&in_flight) else {
                return;
            };
            let show = show.clone();
            spawn_local(async move {
                let _guard = guard;
                let timeout_ms = FrontendConfig::new().geolocation_timeout_ms;
                let result = match current_position(timeout_ms).await {
                    Ok(coordinates) => {
                        search(&FoodWasteClient::shared(), CharitySearch::Near(coordinates)).await
                    }
                    Err(err) => CharityListing::from_geolocation_error(err),
                };
                show(result);
            });
        })
    };

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                location.set(input.value());
            }
        })
    };

    let is_busy = *busy;

    html! {
        <div class="max-w-5xl mx-auto space-y-6">
            <div class="card bg-base-100 shadow-lg">
                <form class="card-body" onsubmit={on_search}>
                    <h2 class="card-title text-2xl">{i18n.t("charities.title")}</h2>
                    <p class="text-base-content/70">{i18n.t("charities.subtitle")}</p>
                    <div class="join w-full">
                        <input
                            id="location"
                            class="input input-bordered join-item w-full"
                            type="text"
                            placeholder={i18n.t("charities.location_placeholder")}
                            value={(*location).clone()}
                            oninput={on_location_change}
                        />
                        <button class="btn btn-success join-item" type="submit" disabled={is_busy}>
                            <i class="fas fa-search"></i>
                            {i18n.t("charities.search")}
                        </button>
                    </div>
                    <button class="btn btn-outline" type="button" disabled={is_busy} onclick={on_use_location}>
                        <i class="fas fa-location-crosshairs"></i>
                        {i18n.t("charities.use_location")}
                    </button>
                </form>
            </div>
            if is_busy {
                <Loading label={i18n.t("charities.searching")} />
            } else {
                <CharityResults listing={(*listing).clone()} />
            }
        </div>
    }
}
