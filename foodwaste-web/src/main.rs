mod api;
mod app;
mod components;
mod config;
mod containers;
mod logging;
mod models;
mod pages;
mod routes;
mod services;

#[cfg(test)]
mod api_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

const ENGLISH: &str = include_str!("../translations/en.json");

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = HashMap::from([("en", ENGLISH)]);

    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    let config = FrontendConfig::new();
    logging::install_panic_hook();
    logging::init(config.log_level);

    log::info!("starting FoodWaste web client against {}", config.api_base_url());

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount into");
        return;
    };
    Renderer::<InternationalApp>::with_root(body.into()).render();
}
