use crate::containers::header::Header;
use crate::routes::MainRoute;
use chrono::{Datelike, Local};
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let year = Local::now().year();

    html! {
    <>
        <Header current_route={props.current_route} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "transition-all",
                "duration-300"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{format!("© {year} {}", i18n.t("footer.rights"))}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
