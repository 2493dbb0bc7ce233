#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! Wire models shared by the FoodWaste web client.
//!
//! Everything here is target agnostic: request and response payloads for the
//! backend API, client-side validation of form input, display formatting of
//! prediction results, and the error taxonomy surfaced to the view layer.

pub mod models;
