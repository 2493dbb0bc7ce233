use crate::api::FoodWasteClient;
use crate::models::session::Session;
use crate::routes::{MainRoute, switch};
use crate::services::auth::browser_authenticator;
use wasm_bindgen_futures::spawn_local;
use yew::suspense::Suspense;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Root component. Restores the persisted session once, keeps the shared
/// client's bearer token in step with the store, and hands off to the router.
#[function_component(App)]
pub fn app() -> Html {
    let (session, dispatch) = use_store::<Session>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let session = browser_authenticator().load().await;
                dispatch.set(session);
            });
            || ()
        });
    }

    {
        let token = session.token().map(ToString::to_string);
        use_effect_with(token, |token| {
            FoodWasteClient::shared().set_bearer_token(token.clone());
            || ()
        });
    }

    html! {
        <Suspense fallback={ html! { <crate::components::loading::Loading /> } }>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </Suspense>
    }
}
