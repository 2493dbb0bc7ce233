pub mod charity;
pub mod errors;
pub mod prediction;
pub mod response;
pub mod user;

pub use charity::{Charity, CharitySearch, CharitySearchResponse, Coordinates};
pub use errors::{ClientError, ErrorBody, ValidationError};
pub use prediction::{EventType, PredictionRequest, PredictionResult, PredictionSummary};
pub use response::{Validate, decode_response};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
