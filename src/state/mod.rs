//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`form` for the validated auth card, `face`
//! for the decorative tracking face) so each page depends on a small
//! focused model. Both are plain structs wrapped in `RwSignal`s by their
//! owning page.

pub mod face;
pub mod form;
