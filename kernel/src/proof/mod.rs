//! Proof module: canonical framing and content hashing for determinism checks.
//!
//! Nothing else in the kernel depends on `proof` except digest helpers in `embed`.

pub mod canon;
pub mod hash;
