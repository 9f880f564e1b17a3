//! Page-scoped client state.
//!
//! DESIGN
//! ======
//! State is split by concern so each component depends on a small model:
//! `lead_form` owns the contact form values and submission lifecycle, `logo`
//! owns the one-way image fallback flag. Both live only for a single page
//! view and are never persisted.

pub mod lead_form;
pub mod logo;
