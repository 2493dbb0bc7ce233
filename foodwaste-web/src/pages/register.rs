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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    mobile: String,
    password: String,
}

fn field_input(
    form: &UseStateHandle<RegisterForm>,
    update: fn(&mut RegisterForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        }
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let (i18n, ..) = use_translation();
    let form = use_state(RegisterForm::default);
    let (session, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let onsubmit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if dispatch.get().loading {
                return;
            }
            let values = (*form).clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            dispatch.reduce(|current| current.begin().into());
            spawn_local(async move {
                let current = dispatch.get();
                let next = browser_authenticator()
                    .register(
                        &current,
                        &values.name,
                        &values.email,
                        &values.mobile,
                        &values.password,
                    )
                    .await;
                let signed_in = next.is_authenticated() && next.error.is_none();
                dispatch.set(next);
                if signed_in && let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Home);
                }
            });
        })
    };

    let is_busy = session.loading;
    let fields = [
        ("name", "text", "name", form.name.clone(), field_input(&form, |f, v| f.name = v)),
        ("email", "email", "email", form.email.clone(), field_input(&form, |f, v| f.email = v)),
        ("mobile", "tel", "tel", form.mobile.clone(), field_input(&form, |f, v| f.mobile = v)),
        (
            "password",
            "password",
            "new-password",
            form.password.clone(),
            field_input(&form, |f, v| f.password = v),
        ),
    ];

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("register.title")}</h2>
                    <ErrorAlert message={session.error.clone()} />
                    { for fields.into_iter().map(|(id, kind, autocomplete, value, oninput)| html! {
                        <div class="form-control">
                            <label class="label" for={id}>
                                <span class="label-text">{i18n.t(&format!("register.{id}"))}</span>
                            </label>
                            <input
                                id={id}
                                class="input input-bordered"
                                type={kind}
                                autocomplete={autocomplete}
                                {value}
                                {oninput}
                            />
                        </div>
                    }) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { i18n.t("register.submitting") } else { i18n.t("register.submit") }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {i18n.t("register.have_account")}{" "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {i18n.t("header.login")}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
