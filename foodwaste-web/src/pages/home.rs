use crate::components::hero::Hero;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use shared::models::User;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

/// Feature blurbs: translation key and Font Awesome icon.
const FEATURES: [(&str, &str); 4] = [
    ("smart_predictions", "chart-column"),
    ("location_tracking", "map-location-dot"),
    ("community_impact", "people-group"),
    ("sustainability", "heart"),
];

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    #[prop_or_default]
    pub user: Option<User>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="max-w-6xl mx-auto space-y-12">
            <Hero user={props.user.clone()} />

            <section class="space-y-6">
                <div class="text-center">
                    <h2 class="text-sm font-semibold uppercase text-success">{i18n.t("home.features_kicker")}</h2>
                    <p class="text-3xl font-extrabold">{i18n.t("home.features_title")}</p>
                </div>
                <div class="grid gap-6 md:grid-cols-2">
                    { for FEATURES.iter().map(|(key, icon)| html! {
                        <div class="flex gap-4 feature">
                            <div class="flex h-12 w-12 shrink-0 items-center justify-center rounded-box bg-success text-success-content">
                                <i class={classes!("fa-solid", format!("fa-{icon}"))}></i>
                            </div>
                            <div>
                                <p class="text-lg font-medium">{i18n.t(&format!("home.features.{key}.name"))}</p>
                                <p class="text-base-content/70">{i18n.t(&format!("home.features.{key}.description"))}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="bg-base-200 rounded-box p-8 flex flex-col lg:flex-row lg:items-center lg:justify-between gap-4">
                <h2 class="text-3xl font-extrabold">
                    <span class="block">{i18n.t("home.cta_line1")}</span>
                    <span class="block text-success">{i18n.t("home.cta_line2")}</span>
                </h2>
                <Link<MainRoute> to={MainRoute::Charities} classes="btn btn-success">
                    {i18n.t("home.find_charities")}
                </Link<MainRoute>>
            </section>
        </div>
    }
}
