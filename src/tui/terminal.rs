//! Terminal restoration on panic

/// Install a panic hook that restores the terminal before printing the
/// panic, so a crash doesn't leave the shell in raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
