//! Fast Fourier Transform (FFT) for real sample buffers.
//!
//! [`FastTransform`] implements the iterative radix-2 decimation-in-time
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm).
//! The bit-reversal permutation and per-stage twiddle steps are computed once
//! in [`FastTransform::new`]; every [`forward`](FourierTransform::forward) call
//! then runs in O(N log N) without allocating.

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;

use libm::{cosf, sinf};

use crate::spectrum::Spectrum;
use crate::transform::{FourierTransform, TransformConfig, TransformError};

/// Radix-2 FFT producing a normalized magnitude spectrum.
#[derive(Debug, Clone)]
pub struct FastTransform {
    config: TransformConfig,
    reverse_table: Vec<usize>,
    /// `sin(-π / s)` for span `s`; entry 0 is the identity phasor and never read.
    sin_table: Vec<f32>,
    /// `cos(-π / s)` for span `s`; entry 0 is the identity phasor and never read.
    cos_table: Vec<f32>,
    real: Vec<f32>,
    imag: Vec<f32>,
    spectrum: Spectrum,
}

impl FastTransform {
    /// Whether `buffer_size` can be handled: a power of two of at least 2.
    pub fn supports(buffer_size: usize) -> bool {
        buffer_size >= 2 && buffer_size.is_power_of_two()
    }

    pub fn new(buffer_size: usize, sample_rate: u32) -> Result<Self, TransformError> {
        if !Self::supports(buffer_size) {
            return Err(TransformError::InvalidSize { size: buffer_size });
        }
        let (sin_table, cos_table) = twiddle_tables(buffer_size);
        debug_log!(
            "fft: built reverse and twiddle tables for {} samples at {} Hz",
            buffer_size,
            sample_rate
        );
        Ok(Self {
            config: TransformConfig::new(buffer_size, sample_rate),
            reverse_table: reverse_table(buffer_size),
            sin_table,
            cos_table,
            real: vec![0.0; buffer_size],
            imag: vec![0.0; buffer_size],
            spectrum: Spectrum::new(buffer_size),
        })
    }

    /// Bit-reversed index for every natural index.
    pub fn reverse_table(&self) -> &[usize] {
        &self.reverse_table
    }

    pub fn sin_table(&self) -> &[f32] {
        &self.sin_table
    }

    pub fn cos_table(&self) -> &[f32] {
        &self.cos_table
    }

    fn butterflies(&mut self) {
        let n = self.config.buffer_size();
        let real = &mut self.real;
        let imag = &mut self.imag;
        let mut half_size = 1;
        while half_size < n {
            let step_re = self.cos_table[half_size];
            let step_im = self.sin_table[half_size];
            let mut w_re = 1.0f32;
            let mut w_im = 0.0f32;
            for group in 0..half_size {
                let mut i = group;
                while i < n {
                    let off = i + half_size;
                    let t_re = w_re * real[off] - w_im * imag[off];
                    let t_im = w_re * imag[off] + w_im * real[off];
                    real[off] = real[i] - t_re;
                    imag[off] = imag[i] - t_im;
                    real[i] += t_re;
                    imag[i] += t_im;
                    i += half_size << 1;
                }
                let tmp = w_re;
                w_re = tmp * step_re - w_im * step_im;
                w_im = tmp * step_im + w_im * step_re;
            }
            half_size <<= 1;
        }
    }
}

impl FourierTransform for FastTransform {
    fn config(&self) -> &TransformConfig {
        &self.config
    }

    fn forward(&mut self, buffer: &[f32]) -> Result<&Spectrum, TransformError> {
        let expected = self.config.buffer_size();
        if buffer.len() != expected {
            return Err(TransformError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        trace_log!("fft: forward over {} samples", expected);

        for ((re, im), &src) in self
            .real
            .iter_mut()
            .zip(self.imag.iter_mut())
            .zip(self.reverse_table.iter())
        {
            *re = buffer[src];
            *im = 0.0;
        }
        self.butterflies();
        self.spectrum.update(&self.real, &self.imag);
        Ok(&self.spectrum)
    }

    fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }
}

/// Doubling construction of the bit-reversal permutation for `n` (a power of two).
fn reverse_table(n: usize) -> Vec<usize> {
    let mut table = vec![0usize; n];
    let mut limit = 1;
    let mut bit = n >> 1;
    while limit < n {
        for i in 0..limit {
            table[i + limit] = table[i] + bit;
        }
        limit <<= 1;
        bit >>= 1;
    }
    table
}

/// Per-span phase steps `(sin(-π/s), cos(-π/s))`.
///
/// Span 0 has no angle; it holds the identity phasor `(0, 1)`.
fn twiddle_tables(n: usize) -> (Vec<f32>, Vec<f32>) {
    let mut sin_table = vec![0.0f32; n];
    let mut cos_table = vec![0.0f32; n];
    cos_table[0] = 1.0;
    for span in 1..n {
        let angle = -PI / span as f32;
        sin_table[span] = sinf(angle);
        cos_table[span] = cosf(angle);
    }
    (sin_table, cos_table)
}
