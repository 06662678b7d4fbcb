//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless where possible; form values, error messages,
//! and visibility flags are owned by the parent page and passed down.

pub mod input_field;
pub mod password_checklist;
pub mod tracking_face;
