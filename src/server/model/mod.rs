//! Server-side parameter types.
//!
//! Most endpoints pass their request DTOs straight to the repositories since
//! no transformation happens on the way down; the types here exist where the
//! service layer builds parameters itself.

pub mod user;
