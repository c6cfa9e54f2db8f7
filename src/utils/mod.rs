//! Shared helpers for page rendering.
//!
//! | Module    | Purpose                                    |
//! |-----------|--------------------------------------------|
//! | `date`    | Publication dates and long formatting      |
//! | `html`    | Escaping and text extraction               |
//! | `reading` | Reading-time estimation                    |

pub mod date;
pub mod html;
pub mod reading;
