//! Analysis window functions applied to a buffer before transforming it.

use alloc::vec::Vec;
use core::f32::consts::PI;

use libm::{cosf, expf, fabsf, sinf};

use crate::BufferProcessor;

/// Default `alpha` for [`WindowKind::Blackman`] (the classic Blackman window).
pub const BLACKMAN_ALPHA: f32 = 0.16;
/// Default `alpha` for [`WindowKind::Gauss`].
pub const GAUSS_ALPHA: f32 = 0.25;

/// Window shapes. Parameterized kinds carry their own `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowKind {
    Bartlett,
    BartlettHann,
    Blackman { alpha: f32 },
    Cosine,
    Gauss { alpha: f32 },
    Hamming,
    Hann,
    Lanczos,
    Rectangular,
    Triangular,
}

impl WindowKind {
    /// Blackman window with [`BLACKMAN_ALPHA`].
    pub const fn blackman() -> Self {
        WindowKind::Blackman {
            alpha: BLACKMAN_ALPHA,
        }
    }

    /// Gaussian window with [`GAUSS_ALPHA`].
    pub const fn gauss() -> Self {
        WindowKind::Gauss { alpha: GAUSS_ALPHA }
    }

    /// Window coefficient at `index` for a window of `length` samples.
    ///
    /// A single-sample window is `1.0` for every kind.
    pub fn value(self, length: usize, index: usize) -> f32 {
        if length <= 1 {
            return 1.0;
        }
        let l = length as f32;
        let m = (length - 1) as f32;
        let i = index as f32;
        match self {
            WindowKind::Bartlett => 2.0 / m * (m / 2.0 - fabsf(i - m / 2.0)),
            WindowKind::BartlettHann => {
                0.62 - 0.48 * fabsf(i / m - 0.5) - 0.38 * cosf(2.0 * PI * i / m)
            }
            WindowKind::Blackman { alpha } => {
                let a0 = (1.0 - alpha) / 2.0;
                let a1 = 0.5;
                let a2 = alpha / 2.0;
                a0 - a1 * cosf(2.0 * PI * i / m) + a2 * cosf(4.0 * PI * i / m)
            }
            WindowKind::Cosine => cosf(PI * i / m - PI / 2.0),
            WindowKind::Gauss { alpha } => {
                let x = (i - m / 2.0) / (alpha * m / 2.0);
                expf(-0.5 * x * x)
            }
            WindowKind::Hamming => 0.54 - 0.46 * cosf(2.0 * PI * i / m),
            WindowKind::Hann => 0.5 * (1.0 - cosf(2.0 * PI * i / m)),
            WindowKind::Lanczos => sinc(2.0 * i / m - 1.0),
            WindowKind::Rectangular => 1.0,
            WindowKind::Triangular => 2.0 / l * (l / 2.0 - fabsf(i - m / 2.0)),
        }
    }
}

fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        1.0
    } else {
        sinf(PI * x) / (PI * x)
    }
}

/// Generate `len` coefficients of `kind`.
pub fn window(kind: WindowKind, len: usize) -> Vec<f32> {
    (0..len).map(|i| kind.value(len, i)).collect()
}

/// Multiply `buffer` in place by a window of the same length.
pub fn apply(kind: WindowKind, buffer: &mut [f32]) {
    let len = buffer.len();
    for (i, x) in buffer.iter_mut().enumerate() {
        *x *= kind.value(len, i);
    }
}

impl BufferProcessor for WindowKind {
    fn process(&mut self, buffer: &mut [f32]) {
        apply(*self, buffer);
    }
}
