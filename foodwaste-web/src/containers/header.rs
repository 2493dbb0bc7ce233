use crate::{
    components::nav_bar::NavBar, models::session::Session, routes::MainRoute,
    services::auth::browser_authenticator,
};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Binds the navigation bar to the session store.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (session, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |()| {
        dispatch.set(browser_authenticator().logout());
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Login);
        }
    });

    html! {
        <NavBar
            user={session.user().cloned()}
            current_route={props.current_route}
            {on_logout}
        />
    }
}
