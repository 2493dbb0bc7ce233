use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct ErrorAlertProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline error banner. Renders nothing without a message.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };
    html! {
        <div class="alert alert-error" role="alert">
            <i class="fa-solid fa-circle-exclamation"></i>
            <span>{message.clone()}</span>
        </div>
    }
}
