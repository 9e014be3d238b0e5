// ABOUTME: Core data models for the kiosk: collected answers and recommendation bundles

pub mod answers;
pub mod recommendation;

pub use answers::{AnswerStore, Question};
pub use recommendation::{Bundle, Product, all_bundles, resolve, resolve_answers};
