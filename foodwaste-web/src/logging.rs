//! Console logging and panic reporting.

use log::LevelFilter;

/// Sends `log` records to the browser console. `Off` installs nothing.
pub fn init(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
}

/// Routes panic payloads and locations to the console instead of the
/// truncated default message.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        web_sys::console::error_1(&format!("Panic: {payload}").into());
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));
}
