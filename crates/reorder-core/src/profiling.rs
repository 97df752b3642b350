//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are compiled in everywhere but cost a single atomic load until
//! [`enable`] is called.

pub use puffin::{profile_function, profile_scope};

/// Start recording profiling scopes.
pub fn enable() {
    puffin::set_scopes_on(true);
    tracing::debug!("Puffin profiling scopes enabled");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_turns_scopes_on() {
        enable();
        assert!(puffin::are_scopes_on());
    }
}
