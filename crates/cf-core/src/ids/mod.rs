//! ID type wrappers for type safety.

mod clip;
mod id_macro;

pub use clip::ClipId;
