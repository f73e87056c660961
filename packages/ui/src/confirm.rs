/// Ask the user to confirm a destructive action.
///
/// Uses the browser's native confirm dialog on the web; native builds (tests,
/// tooling) answer yes so flows stay exercisable without a window.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
