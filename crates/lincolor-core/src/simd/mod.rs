//! SIMD-Dispatched Buffer Operations
//!
//! Batch versions of the per-pixel conversions, using the `multiversion`
//! crate for automatic CPU dispatch.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod batch;

pub use batch::{
    linear_to_srgba8_batch, over_batch, srgba8_bytes_to_linear, srgba8_to_linear_batch,
};

/// Instruction set the batch loops dispatch to on this CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchTarget {
    Avx2,
    Sse41,
    Neon,
    Scalar,
}

impl DispatchTarget {
    /// Short label, e.g. for benchmark group names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Avx2 => "avx2",
            Self::Sse41 => "sse4.1",
            Self::Neon => "neon",
            Self::Scalar => "scalar",
        }
    }
}

impl std::fmt::Display for DispatchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect which of the `multiversion` targets on the batch loops runs here.
///
/// Checked best first, in the same order as the target list.
pub fn dispatch_target() -> DispatchTarget {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return DispatchTarget::Avx2;
        }
        if is_x86_feature_detected!("sse4.1") {
            return DispatchTarget::Sse41;
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return DispatchTarget::Neon;
        }
    }
    DispatchTarget::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_target_matches_arch() {
        let target = dispatch_target();
        if cfg!(not(any(target_arch = "x86_64", target_arch = "aarch64"))) {
            assert_eq!(target, DispatchTarget::Scalar);
        }
        if cfg!(target_arch = "x86_64") {
            assert_ne!(target, DispatchTarget::Neon);
        }
        assert_eq!(target.to_string(), target.name());
    }

    #[test]
    fn test_dispatch_target_is_stable() {
        assert_eq!(dispatch_target(), dispatch_target());
    }
}
