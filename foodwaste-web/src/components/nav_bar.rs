use crate::{
    components::{header_nav_item::HeaderNavItem, user_menu::UserMenu},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::models::User;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// The signed-in user, if any. Decides which controls are shown.
    #[prop_or_default]
    pub user: Option<User>,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    pub on_logout: Callback<()>,
}

/// Brand link, page links, and either the sign-in pair or the user menu.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let (i18n, ..) = use_translation();

    let routes = || -> Html {
        html! {
            { for MainRoute::navigation().into_iter().map(|route| html! {
                <HeaderNavItem {route} current_route={props.current_route} />
            }) }
        }
    };

    let account = props.user.as_ref().map_or_else(
        || {
            html! {
                <div class="flex gap-2 auth-buttons">
                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                        {i18n.t("header.login")}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-sm">
                        {i18n.t("header.register")}
                    </Link<MainRoute>>
                </div>
            }
        },
        |user| {
            html! {
                <UserMenu user={user.clone()} on_logout={props.on_logout.clone()} />
            }
        },
    );

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg text-success">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { routes() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { routes() }
            </ul>
            <div class="flex items-center">
                { account }
            </div>
        </nav>
    }
}
