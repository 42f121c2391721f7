/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Give handlers typed access to the caller identity the token filter
 *   attached to the request.
 * - Keep the axum plumbing in `core`, the type (the contract) in `types`.
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
