use i18nrs::yew::use_translation;
use shared::models::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub user: User,
    pub on_logout: Callback<()>,
}

/// Signed-in user's name with a dropdown holding the logout action.
#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let (i18n, ..) = use_translation();

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_logout.emit(());
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                <i class="fa-solid fa-circle-user text-lg"></i>
                <span class="user-name">{ props.user.display_name() }</span>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-xs text-base-content/70">{ &props.user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
