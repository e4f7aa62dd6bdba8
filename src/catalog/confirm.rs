//! Confirmation for destructive operations.
//!
//! Dropping a database asks for the database name to be typed back. The
//! catalog never reads from a terminal itself; callers hand it either the
//! answer up front or a [`Prompt`] that produces one.

/// Source of the answer to "type the database name to confirm".
pub trait Confirm {
    /// Return the confirmation text for dropping `database`.
    fn confirm(self, database: &str) -> String;
}

impl Confirm for &str {
    fn confirm(self, _database: &str) -> String {
        self.to_string()
    }
}

impl Confirm for String {
    fn confirm(self, _database: &str) -> String {
        self
    }
}

/// A callback asked for the confirmation only once the database is known to
/// exist.
pub struct Prompt<F>(pub F);

impl<F> Confirm for Prompt<F>
where
    F: FnOnce(&str) -> String,
{
    fn confirm(self, database: &str) -> String {
        (self.0)(database)
    }
}
