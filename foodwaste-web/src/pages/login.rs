use crate::{
    components::error_alert::ErrorAlert, models::session::Session, routes::MainRoute,
    services::auth::browser_authenticator,
};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::{hooks::use_navigator, prelude::Link};
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let (session, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let onsubmit = {
        let identifier = identifier.clone();
        let password = password.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if dispatch.get().loading {
                return;
            }
            let identifier = (*identifier).clone();
            let password = (*password).clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            dispatch.reduce(|current| current.begin().into());
            spawn_local(async move {
                let current = dispatch.get();
                let next = browser_authenticator()
                    .login(&current, &identifier, &password)
                    .await;
                let signed_in = next.is_authenticated() && next.error.is_none();
                dispatch.set(next);
                if signed_in && let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Home);
                }
            });
        })
    };

    let on_identifier_change = {
        let identifier = identifier.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                identifier.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = session.loading;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    <ErrorAlert message={session.error.clone()} />
                    <div class="form-control">
                        <label class="label" for="identifier">
                            <span class="label-text">{i18n.t("login.identifier")}</span>
                        </label>
                        <input
                            id="identifier"
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            value={(*identifier).clone()}
                            oninput={on_identifier_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{i18n.t("login.password")}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {i18n.t("login.no_account")}{" "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {i18n.t("header.register")}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
