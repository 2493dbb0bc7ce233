mod charities;
mod error;
mod home;
mod login;
mod predict;
mod register;

pub use charities::CharitiesPage;
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) use charities::CharityResults;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use predict::PredictPage;
pub use register::RegisterPage;
