use i18nrs::yew::use_translation;
use shared::models::Charity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CharityCardProps {
    pub charity: Charity,
}

/// One search result.
///
/// Every field comes from third-party map data. Text is only ever rendered as
/// text nodes, and links are built from the sanitised forms on [`Charity`].
#[function_component(CharityCard)]
pub fn charity_card(props: &CharityCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let show_contact = use_state(|| false);
    let charity = &props.charity;

    let website = charity.website_url().map(|url| url.to_string());
    let tel = charity.tel_href();
    // Values that are not safe links still show, as text.
    let website_line = match (&website, charity.website.as_deref().map(str::trim)) {
        (Some(href), _) => html! {
            <p class="charity-website">
                <i class="fas fa-globe me-2"></i>
                <a class="link" href={href.clone()} target="_blank" rel="noopener noreferrer">{href.clone()}</a>
            </p>
        },
        (None, Some(raw)) if !raw.is_empty() => html! {
            <p class="charity-website"><i class="fas fa-globe me-2"></i><span>{raw.to_string()}</span></p>
        },
        _ => html! {},
    };

    let toggle_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_: MouseEvent| show_contact.set(!*show_contact))
    };

    let phone = tel.as_ref().map_or_else(
        || html! { <span>{charity.phone.clone()}</span> },
        |href| html! { <a class="link" href={href.clone()}>{charity.phone.clone()}</a> },
    );

    let contact = if *show_contact {
        html! {
            <div class="charity-contact mt-3 p-3 rounded-box bg-base-200 text-sm space-y-1">
                <p><i class="fas fa-phone me-2"></i>{phone}</p>
                <p class="text-base-content/70">{i18n.t("charities.contact_hint")}</p>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="card bg-base-100 shadow-md charity-card">
            <div class="card-body">
                <h3 class="card-title charity-name">{charity.name.clone()}</h3>
                <div class="charity-details text-sm space-y-1">
                    <p><i class="fas fa-map-marker-alt me-2"></i>{charity.address.clone()}</p>
                    <p><i class="fas fa-route me-2"></i>{charity.distance_label()}</p>
                    <p><i class="fas fa-tag me-2"></i>{charity.kind.clone()}</p>
                    { website_line }
                </div>
                { contact }
                <div class="card-actions justify-end mt-2">
                    if let Some(href) = website {
                        <a class="btn btn-outline btn-sm" href={href} target="_blank" rel="noopener noreferrer">
                            <i class="fas fa-globe me-1"></i>{i18n.t("charities.website")}
                        </a>
                    }
                    <button class="btn btn-primary btn-sm" type="button" onclick={toggle_contact}>
                        <i class="fas fa-phone me-1"></i>{i18n.t("charities.contact")}
                    </button>
                </div>
            </div>
        </div>
    }
}
