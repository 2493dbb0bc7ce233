pub mod auth;
pub mod charity;
pub mod geolocation;
pub mod in_flight;
pub mod prediction;
pub mod storage;

#[cfg(test)]
mod test_support;
