// Internal modules
pub(crate) mod codec;
#[allow(clippy::module_inception)]
mod token;

// Public API exports
pub use token::Token;
