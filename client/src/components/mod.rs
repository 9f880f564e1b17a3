//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `card` and `button` are stateless presentational primitives. `logo` owns
//! its own fallback flag. `field` binds inputs to the page's lead form
//! signal. `nav` and `footer` frame the page.

pub mod button;
pub mod card;
pub mod field;
pub mod footer;
pub mod logo;
pub mod nav;
