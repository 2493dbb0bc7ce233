use i18nrs::yew::use_translation;
use shared::models::PredictionSummary;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Eq)]
pub struct PredictionResultCardProps {
    pub summary: PredictionSummary,
}

#[function_component(PredictionResultCard)]
pub fn prediction_result_card(props: &PredictionResultCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let summary = &props.summary;

    html! {
        <div class="card bg-base-200 shadow-md prediction-results">
            <div class="card-body">
                <h3 class="card-title">{i18n.t("predict.results_title")}</h3>
                <div class="stats stats-vertical lg:stats-horizontal">
                    <div class="stat">
                        <div class="stat-title">{i18n.t("predict.wastage_label")}</div>
                        <div class="stat-value text-success">{summary.wastage.clone()}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{i18n.t("predict.attendance_label")}</div>
                        <div class="stat-desc text-base">{summary.attendance.clone()}</div>
                        <div class="stat-desc text-base">{summary.percentage.clone()}</div>
                    </div>
                </div>
                <p class="text-sm text-base-content/70">{i18n.t("predict.redistribute_hint")}</p>
            </div>
        </div>
    }
}
