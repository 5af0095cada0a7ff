//! 4x4 matrix keypad scanner
//!
//! Rows are outputs idling high; columns are inputs with pull-ups. A
//! scan drives one row low at a time and reads which column follows it.
//! Scans are rate limited, which also debounces the contacts, and a key
//! is reported once when it goes down. Phases that do not read the
//! keypad leave it unpolled; after such a gap the last scan no longer
//! says anything about the key, so it counts as released.

use ardubomb_core::config::{KEYPAD_COLS, KEYPAD_ROWS};
use ardubomb_core::input::{Key, KEYMAP};
use ardubomb_core::traits::KeypadScanner;
use ardubomb_hal::elapsed_ms;
use embedded_hal::digital::{InputPin, OutputPin};

/// Minimum time between scans
pub const SCAN_INTERVAL_MS: u32 = 10;

/// Poll gap after which the held key is forgotten
pub const STALE_SCAN_MS: u32 = SCAN_INTERVAL_MS * 2;

/// Matrix keypad driver
pub struct MatrixKeypad<R, C> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
    keymap: [[Key; KEYPAD_COLS]; KEYPAD_ROWS],
    last_scan_ms: Option<u32>,
    /// Key down at the last scan
    held: Option<Key>,
}

impl<R: OutputPin, C: InputPin> MatrixKeypad<R, C> {
    /// Create a scanner with the standard key layout
    pub fn new(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS]) -> Self {
        Self::with_keymap(rows, cols, KEYMAP)
    }

    pub fn with_keymap(
        mut rows: [R; KEYPAD_ROWS],
        cols: [C; KEYPAD_COLS],
        keymap: [[Key; KEYPAD_COLS]; KEYPAD_ROWS],
    ) -> Self {
        for row in rows.iter_mut() {
            row.set_high().ok();
        }
        Self {
            rows,
            cols,
            keymap,
            last_scan_ms: None,
            held: None,
        }
    }

    /// Key currently held, as of the last scan
    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Scan the whole matrix; first key found wins
    ///
    /// Pin errors read as "not pressed".
    pub fn scan(&mut self) -> Option<Key> {
        let mut found = None;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low().ok();
            for (c, col) in self.cols.iter_mut().enumerate() {
                if found.is_none() && col.is_low().unwrap_or(false) {
                    found = Some(self.keymap[r][c]);
                }
            }
            row.set_high().ok();
        }
        found
    }
}

impl<R: OutputPin, C: InputPin> KeypadScanner for MatrixKeypad<R, C> {
    fn poll_key(&mut self, now_ms: u32) -> Option<Key> {
        if let Some(last) = self.last_scan_ms {
            let gap = elapsed_ms(now_ms, last);
            if gap < SCAN_INTERVAL_MS {
                return None;
            }
            if gap > STALE_SCAN_MS {
                self.held = None;
            }
        }
        self.last_scan_ms = Some(now_ms);

        let key = self.scan();
        let previous = core::mem::replace(&mut self.held, key);
        match key {
            Some(k) if previous != Some(k) => Some(k),
            _ => None,
        }
    }
}
