//! Audible/visible alarm output

/// Something that can be switched on and off to alert the player
pub trait Annunciator {
    /// Switch the output on or off
    fn set_active(&mut self, on: bool);

    /// Whether the output is currently on
    fn is_active(&self) -> bool;
}

impl<T: Annunciator + ?Sized> Annunciator for &mut T {
    fn set_active(&mut self, on: bool) {
        (**self).set_active(on)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
