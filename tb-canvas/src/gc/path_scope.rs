use super::Gc;
use std::ops::{Deref, DerefMut};

/// A nested drawing scope that builds one closed path.
///
/// Opening the scope commits whatever the graphics context had pending and
/// starts an empty path with no pen. Dropping it closes the current subpath
/// but does not commit; the closed shape is painted by the next style change
/// or when the graphics context ends.
///
/// All [`Gc`] operations are available through `Deref`.
pub struct PathScope<'g, 'a> {
    gc: &'g mut Gc<'a>,
}

impl<'g, 'a> PathScope<'g, 'a> {
    pub fn new(gc: &'g mut Gc<'a>) -> Self {
        gc.flush();
        gc.new_path();
        Self { gc }
    }
}

impl<'a> Deref for PathScope<'_, 'a> {
    type Target = Gc<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.gc
    }
}

impl DerefMut for PathScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.gc
    }
}

impl Drop for PathScope<'_, '_> {
    fn drop(&mut self) {
        self.gc.close_path();
    }
}
