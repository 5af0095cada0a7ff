//! Display traits for the character LCD and the clock display

/// Colon segment flag for [`NumericDisplay::show_value`]
///
/// The bitmask is applied from the most significant digit; bit 6 lights
/// the dot of digit 1, which is wired as the colon on clock modules.
pub const DOTS: u8 = 0b0100_0000;

/// Text display addressed by column and row
pub trait CharacterDisplay {
    /// Initialise the controller for the given geometry
    fn begin(&mut self, columns: u8, rows: u8);

    /// Clear all characters and home the cursor
    fn clear(&mut self);

    /// Move the cursor
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Print ASCII text at the cursor
    fn print(&mut self, text: &str);
}

/// Helpers on top of [`CharacterDisplay`]
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Print text starting at the beginning of a row
    fn print_line(&mut self, row: u8, text: &str) {
        self.set_cursor(0, row);
        self.print(text);
    }
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplayExt for T {}

/// Four digit numeric display
pub trait NumericDisplay {
    /// Show a value with leading zeros and the given dot flags
    fn show_value(&mut self, value: u16, flags: u8);

    /// Blank all digits
    fn clear(&mut self);

    /// Set brightness (0-7)
    fn set_brightness(&mut self, level: u8);
}
