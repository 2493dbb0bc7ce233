//! One-shot device position lookups through `navigator.geolocation`.

use js_sys::{Function, Promise, Reflect};
use shared::models::Coordinates;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

/// Why no position could be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    /// The browser has no geolocation support.
    Unsupported,
    /// The user or browser policy refused access.
    PermissionDenied,
    /// The device could not determine a position.
    Unavailable,
    /// No fix arrived before the timeout.
    Timeout,
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }

    /// Message for the search view. Every variant except `Unsupported` points
    /// the user at manual entry.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Unsupported => "Geolocation is not supported by your browser",
            Self::PermissionDenied => {
                "Location access was denied. Please enter your location manually."
            }
            Self::Unavailable | Self::Timeout => {
                "Failed to get nearby charities. Please try entering your location manually."
            }
        }
    }
}

/// Request a fresh, high-accuracy fix.
///
/// # Errors
/// See [`GeolocationError`].
pub async fn current_position(timeout_ms: u32) -> Result<Coordinates, GeolocationError> {
    let window = web_sys::window().ok_or(GeolocationError::Unsupported)?;
    let navigator = window.navigator();
    if !has_field(&navigator, "geolocation") {
        return Err(GeolocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(timeout_ms);
    options.set_maximum_age(0);

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(error) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            let _ = reject.call1(&JsValue::NULL, &error);
        }
    });

    let position = JsFuture::from(promise).await.map_err(|error| {
        let code = error_code(&error);
        log::warn!("geolocation failed with code {code}");
        GeolocationError::from_code(code)
    })?;

    let coords = Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|_| GeolocationError::Unavailable)?;
    let latitude = number_field(&coords, "latitude")?;
    let longitude = number_field(&coords, "longitude")?;
    Ok(Coordinates {
        latitude,
        longitude,
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "position error codes are small positive integers"
)]
fn error_code(error: &JsValue) -> u16 {
    Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map_or(0, |code| code as u16)
}

/// `navigator.geolocation` reads as `undefined` rather than throwing where
/// the API is missing.
fn has_field(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
        && Reflect::get(target, &JsValue::from_str(name))
            .is_ok_and(|value| !value.is_undefined() && !value.is_null())
}

fn number_field(target: &JsValue, name: &str) -> Result<f64, GeolocationError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|value| value.is_finite())
        .ok_or(GeolocationError::Unavailable)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn undefined_api_counts_as_missing() {
        let navigator = Object::new();
        assert!(!has_field(&navigator, "geolocation"));

        Reflect::set(&navigator, &"geolocation".into(), &JsValue::UNDEFINED).unwrap();
        assert!(!has_field(&navigator, "geolocation"));

        Reflect::set(&navigator, &"geolocation".into(), &Object::new()).unwrap();
        assert!(has_field(&navigator, "geolocation"));
    }
}
