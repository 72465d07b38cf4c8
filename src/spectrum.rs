use alloc::vec;
use alloc::vec::Vec;
use core::ops::Deref;

use libm::sqrtf;

/// Strongest bin of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub bin: usize,
    pub magnitude: f32,
}

/// Normalized magnitude spectrum, one value per bin from DC up to Nyquist.
///
/// Owned by a transform and overwritten on each `forward` call. Dereferences
/// to `[f32]`; copy it with `to_vec()` to keep a history across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    magnitudes: Vec<f32>,
    peak: Option<SpectralPeak>,
    /// `2 / buffer_size`: folds negative-frequency energy back and normalizes by length.
    scale: f32,
}

impl Spectrum {
    pub(crate) fn new(buffer_size: usize) -> Self {
        let scale = if buffer_size == 0 {
            0.0
        } else {
            2.0 / buffer_size as f32
        };
        Self {
            magnitudes: vec![0.0; buffer_size / 2],
            peak: None,
            scale,
        }
    }

    /// Overwrite every bin from the real and imaginary parts of the first
    /// `len()` frequency components.
    pub(crate) fn update(&mut self, real: &[f32], imag: &[f32]) {
        debug_assert!(real.len() >= self.magnitudes.len());
        debug_assert!(imag.len() >= self.magnitudes.len());
        let mut peak: Option<SpectralPeak> = None;
        for (k, ((mag, &re), &im)) in self
            .magnitudes
            .iter_mut()
            .zip(real.iter())
            .zip(imag.iter())
            .enumerate()
        {
            *mag = self.scale * sqrtf(re * re + im * im);
            if peak.map_or(true, |p| *mag > p.magnitude) {
                peak = Some(SpectralPeak {
                    bin: k,
                    magnitude: *mag,
                });
            }
        }
        self.peak = peak;
    }

    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// Bin with the largest magnitude; the lowest bin wins ties.
    pub fn peak(&self) -> Option<SpectralPeak> {
        self.peak
    }
}

impl Deref for Spectrum {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.magnitudes
    }
}

impl AsRef<[f32]> for Spectrum {
    fn as_ref(&self) -> &[f32] {
        &self.magnitudes
    }
}
