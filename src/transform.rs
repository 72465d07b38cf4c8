use alloc::boxed::Box;
use core::fmt;

use crate::dft::NaiveTransform;
use crate::fft::FastTransform;
use crate::spectrum::Spectrum;

/// Size and sample rate a transform is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformConfig {
    buffer_size: usize,
    sample_rate: u32,
}

impl TransformConfig {
    pub const fn new(buffer_size: usize, sample_rate: u32) -> Self {
        Self {
            buffer_size,
            sample_rate,
        }
    }

    /// Number of samples every input buffer must hold.
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Sample rate in Hz. Informational only; the transform math ignores it.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of spectrum bins, DC up to (but excluding) Nyquist.
    pub const fn bins(&self) -> usize {
        self.buffer_size / 2
    }

    /// Width of one frequency bin in Hz.
    pub fn bandwidth(&self) -> f32 {
        if self.buffer_size == 0 {
            return 0.0;
        }
        self.sample_rate as f32 / self.buffer_size as f32
    }

    /// Frequency in Hz that bin `k` corresponds to: `k * sample_rate / buffer_size`.
    pub fn bin_frequency(&self, k: usize) -> f32 {
        self.bandwidth() * k as f32
    }
}

/// Errors raised by transform construction and [`FourierTransform::forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The configured buffer size cannot be handled by this transform.
    InvalidSize { size: usize },
    /// The supplied buffer does not hold exactly `expected` samples.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidSize { size } => {
                write!(f, "invalid transform size {size}")
            }
            TransformError::SizeMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} samples, transform expects {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}

/// A real-input transform producing a normalized magnitude spectrum.
///
/// Implementations own their scratch and output buffers, so `forward` needs
/// `&mut self`: one instance serves one thread at a time.
pub trait FourierTransform {
    fn config(&self) -> &TransformConfig;

    /// Transform `buffer` and return the freshly overwritten spectrum.
    fn forward(&mut self, buffer: &[f32]) -> Result<&Spectrum, TransformError>;

    /// Spectrum of the most recent successful `forward` call (all zeros before the first).
    fn spectrum(&self) -> &Spectrum;
}

/// Largest size [`new_transform`] hands to the O(N²) DFT.
///
/// At this size each DFT trig table holds `2048 · 4096` entries (32 MiB).
pub const MAX_NAIVE_SIZE: usize = 4096;

/// Build a transform for `buffer_size`: the FFT when it is a power of two of
/// at least 2, the DFT for other sizes up to [`MAX_NAIVE_SIZE`].
///
/// Larger sizes that are not powers of two return `InvalidSize`. Build a
/// [`NaiveTransform`] directly to go past the limit.
pub fn new_transform(
    buffer_size: usize,
    sample_rate: u32,
) -> Result<Box<dyn FourierTransform>, TransformError> {
    if FastTransform::supports(buffer_size) {
        Ok(Box::new(FastTransform::new(buffer_size, sample_rate)?))
    } else if buffer_size <= MAX_NAIVE_SIZE {
        Ok(Box::new(NaiveTransform::new(buffer_size, sample_rate)?))
    } else {
        Err(TransformError::InvalidSize { size: buffer_size })
    }
}
