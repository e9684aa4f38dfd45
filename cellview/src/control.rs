// control.rs - Play/pause button glue

/// Label for the control button: the glyph names the action a click would
/// take from the current scheduler state.
pub fn action_label(is_paused: bool) -> &'static str {
    if is_paused { "▶ Start" } else { "⏸ Pause" }
}
