use crate::api::WastageApi;
use crate::models::session::AUTHENTICATION_FAILED;
use shared::models::{ClientError, PredictionRequest, PredictionSummary};

/// Shown when a prediction fails without a message from the server.
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// Raw values of the prediction form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionForm {
    pub event_type: String,
    pub expected_attendees: String,
    pub actual_attendees: String,
}

/// What the prediction view shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Summary(PredictionSummary),
    /// Message to show in place of a result.
    Failed(String),
    /// The backend rejected the session token.
    SessionExpired,
}

impl PredictionOutcome {
    pub fn from_result(result: Result<PredictionSummary, ClientError>) -> Self {
        match result {
            Ok(summary) => Self::Summary(summary),
            Err(ClientError::Authentication) => Self::SessionExpired,
            Err(err) => Self::Failed(err.user_message(PREDICTION_FAILED)),
        }
    }

    /// The error text to show, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Summary(_) => None,
            Self::Failed(message) => Some(message),
            Self::SessionExpired => Some(AUTHENTICATION_FAILED),
        }
    }
}

/// Run one submission and turn the outcome into what the view shows.
pub async fn submit<A>(api: &A, form: &PredictionForm) -> PredictionOutcome
where
    A: WastageApi + ?Sized,
{
    let result = predict(api, form).await;
    if let Err(err) = &result {
        log::warn!("prediction failed: {err}");
    }
    PredictionOutcome::from_result(result)
}

/// Validate the form and, only if it passes, ask the backend for a
/// prediction.
///
/// # Errors
/// [`ClientError::Validation`] before any request, or whatever the request
/// failed with.
pub async fn predict<A>(api: &A, form: &PredictionForm) -> Result<PredictionSummary, ClientError>
where
    A: WastageApi + ?Sized,
{
    let request = PredictionRequest::from_form(
        &form.event_type,
        &form.expected_attendees,
        &form.actual_attendees,
    )?;
    log::debug!("requesting prediction for {:?}", request.event_type);
    let result = api.predict_wastage(&request).await?;
    Ok(result.summary())
}
