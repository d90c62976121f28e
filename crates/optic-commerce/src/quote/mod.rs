//! Quote cart module.
//!
//! The cart is a plain value transformed by [`reduce`]; [`QuoteCart`] owns
//! one for a session and exposes the operations as methods.

mod cart;
mod reducer;
mod state;

pub use cart::QuoteCart;
pub use reducer::{reduce, QuoteAction};
pub use state::{CartPhase, QuoteCartState, QuoteLineItem};
