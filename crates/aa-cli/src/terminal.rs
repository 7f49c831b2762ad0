use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Wipe the screen and home the cursor.
pub fn clear(out: &mut impl Write) -> Result<(), String> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(|e| format!("terminal error: {e}"))
}
