//! KeyStart site core.
//!
//! Everything the restaurant page does with its two data documents, written
//! against the [`surface::TargetSurface`] capability so it runs the same in the
//! browser and under test. The wasm crate only supplies a DOM-backed surface
//! and a fetch-backed [`loader::DocumentSource`].

pub mod apply;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod format;
pub mod link;
pub mod loader;
pub mod normalize;
pub mod render;
pub mod settings;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use error::SiteError;
pub use fallback::{FallbackState, ImageFallback, ImageRole};
pub use filter::MenuSession;
pub use loader::{ConfigPhase, DocumentSource, PageLoader};
pub use settings::LoaderSettings;
pub use surface::{Group, Slot, TargetSurface};
