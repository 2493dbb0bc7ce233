use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::models::User;
use yew::{Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub user: Option<User>,
}

/// Landing banner. Anonymous visitors are sent to registration, signed-in
/// users straight to the prediction form.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let (i18n, ..) = use_translation();

    let (target, label) = if props.user.is_some() {
        (MainRoute::Predict, i18n.t("home.predict_wastage"))
    } else {
        (MainRoute::Register, i18n.t("home.get_started"))
    };

    html! {
        <section class="hero bg-base-200 rounded-box py-16">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-extrabold">
                        <span class="block">{i18n.t("home.title_line1")}</span>
                        <span class="block text-success">{i18n.t("home.title_line2")}</span>
                    </h1>
                    <p class="py-6 text-lg">{i18n.t("home.subtitle")}</p>
                    <Link<MainRoute> to={target} classes="btn btn-success btn-lg hero-cta">
                        {label}
                    </Link<MainRoute>>
                </div>
            </div>
        </section>
    }
}
