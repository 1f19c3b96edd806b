//! Text the proxy writes itself: grounding addenda, reference blocks, fallback templates.

pub mod injector;
pub mod templates;

pub use injector::{append_reference, attach_grounding};
pub use templates::{synthesize, ESCALATION_MESSAGE};
