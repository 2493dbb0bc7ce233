use crate::{containers::layout::Layout, models::session::Session, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/predict")]
    Predict,
    #[at("/charities")]
    Charities,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Translation key prefix for the route's label and icon.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Home => "routes.home",
            Self::Login => "routes.login",
            Self::Register => "routes.register",
            Self::Predict => "routes.predict",
            Self::Charities => "routes.charities",
            Self::NotFound => "routes.not_found",
        }
    }

    /// Whether the route is linked from the navigation bar.
    pub fn in_navigation(self) -> bool {
        matches!(self, Self::Home | Self::Predict | Self::Charities)
    }

    /// Routes shown in the navigation bar, in display order.
    pub fn navigation() -> Vec<Self> {
        Self::iter().filter(|route| route.in_navigation()).collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|session: &Session| session.user().cloned());
    let is_authenticated = user.is_some();
    let route = props.route;

    let page = match route {
        MainRoute::Login | MainRoute::Register if is_authenticated => {
            return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
        }
        MainRoute::Home => html! { <HomePage user={(*user).clone()} /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Predict => html! { <PredictPage /> },
        MainRoute::Charities => html! { <CharitiesPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={route}>
            { page }
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    html! { <MainRouteView {route} /> }
}
