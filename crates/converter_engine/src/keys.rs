//! Keyboard shortcut mapping consumed by the page layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// UI-level shortcuts shared by every converter page.
pub enum ShortcutAction {
    /// Move focus to the value input.
    FocusValue,
    /// Move focus to the source-unit picker.
    FocusFrom,
    /// Move focus to the target-unit picker.
    FocusTo,
    /// Swap the source and target units.
    SwapUnits,
}

/// Maps a keyboard event key to a shortcut action.
pub fn keyboard_action(key: &str) -> Option<ShortcutAction> {
    match key {
        "v" | "V" => Some(ShortcutAction::FocusValue),
        "f" | "F" => Some(ShortcutAction::FocusFrom),
        "t" | "T" => Some(ShortcutAction::FocusTo),
        "s" | "S" => Some(ShortcutAction::SwapUnits),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_action_maps_supported_keys() {
        assert_eq!(keyboard_action("v"), Some(ShortcutAction::FocusValue));
        assert_eq!(keyboard_action("F"), Some(ShortcutAction::FocusFrom));
        assert_eq!(keyboard_action("t"), Some(ShortcutAction::FocusTo));
        assert_eq!(keyboard_action("S"), Some(ShortcutAction::SwapUnits));
        assert_eq!(keyboard_action("Enter"), None);
        assert_eq!(keyboard_action(""), None);
    }
}
