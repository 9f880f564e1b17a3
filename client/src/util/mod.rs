//! Browser-facing helpers used by the landing page.
//!
//! `utm` captures attribution parameters from the URL, `dev_checks` holds
//! the debug-build smoke checks run after mount.

pub mod dev_checks;
pub mod utm;
