pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // Context actions
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("+", "+", Increment),
        KeyBinding::new("=", "+", Increment),
        KeyBinding::new("l", "l", Increment),
        KeyBinding::new("right", "→", Increment),
        KeyBinding::new("-", "-", Decrement),
        KeyBinding::new("h", "h", Decrement),
        KeyBinding::new("left", "←", Decrement),
        KeyBinding::new("d d", "dd", Remove),
        KeyBinding::new("delete", "Del", Remove),
        // Shop
        KeyBinding::new("c", "c", CartOpen),
        KeyBinding::new("p", "p", CheckoutOpen),
        KeyBinding::new("t", "t", ThemeToggle),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
