use std::fmt::Debug;

use crate::error::Result;

/// Trait for pluggable multiplication accelerators (native BLAS, GPU, etc.).
///
/// An accelerator computes the plain product `C = A @ B` over column-major
/// f64 buffers. The engine consults it only when all three operands expose
/// contiguous column-major storage and the output is large enough to be
/// worth the hand-off; otherwise it runs its own kernels. Implementations
/// must write every element of `c`.
pub trait Accelerator: Send + Sync + Debug {
    /// Returns the name of this accelerator (e.g., "openblas").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: column-major data of shape [m, k]
    /// - `b`: column-major data of shape [k, n]
    /// - `c`: column-major destination of shape [m, n], fully overwritten
    fn calc(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        m: usize,
        k: usize,
        n: usize,
    ) -> Result<()>;
}
