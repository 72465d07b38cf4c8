//! Reference Discrete Fourier Transform (DFT) by direct summation.
//!
//! [`NaiveTransform`] evaluates every bin as an explicit sum over the input,
//! which costs O(N²) time and O(N²) table memory. It accepts any buffer size
//! and is mainly useful as a correctness oracle for [`crate::fft::FastTransform`].

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;

use libm::{cosf, sinf};

use crate::spectrum::Spectrum;
use crate::transform::{FourierTransform, TransformConfig, TransformError};

/// Direct-summation DFT producing the same normalized magnitude spectrum as the FFT.
#[derive(Debug, Clone)]
pub struct NaiveTransform {
    config: TransformConfig,
    /// `sin(2π·i/N)` for every product `i = k·n`, `k < N/2`, `n < N`.
    sin_table: Vec<f32>,
    cos_table: Vec<f32>,
    real: Vec<f32>,
    imag: Vec<f32>,
    spectrum: Spectrum,
}

impl NaiveTransform {
    pub fn new(buffer_size: usize, sample_rate: u32) -> Result<Self, TransformError> {
        let invalid = TransformError::InvalidSize { size: buffer_size };
        if buffer_size == 0 {
            return Err(invalid);
        }
        let bins = buffer_size / 2;
        let len = bins.checked_mul(buffer_size).ok_or(invalid)?;
        // Table sizes past the address space fail here instead of aborting.
        let mut sin_table: Vec<f32> = Vec::new();
        let mut cos_table: Vec<f32> = Vec::new();
        sin_table.try_reserve_exact(len).map_err(|_| invalid)?;
        cos_table.try_reserve_exact(len).map_err(|_| invalid)?;
        for i in 0..len {
            // Reducing the product keeps the angle inside one period, where f32 is exact enough.
            let angle = 2.0 * PI * (i % buffer_size) as f32 / buffer_size as f32;
            sin_table.push(sinf(angle));
            cos_table.push(cosf(angle));
        }
        debug_log!(
            "dft: built {} trig entries for {} samples at {} Hz",
            len,
            buffer_size,
            sample_rate
        );
        Ok(Self {
            config: TransformConfig::new(buffer_size, sample_rate),
            sin_table,
            cos_table,
            real: vec![0.0; bins],
            imag: vec![0.0; bins],
            spectrum: Spectrum::new(buffer_size),
        })
    }
}

impl FourierTransform for NaiveTransform {
    fn config(&self) -> &TransformConfig {
        &self.config
    }

    fn forward(&mut self, buffer: &[f32]) -> Result<&Spectrum, TransformError> {
        let n = self.config.buffer_size();
        if buffer.len() != n {
            return Err(TransformError::SizeMismatch {
                expected: n,
                actual: buffer.len(),
            });
        }
        trace_log!("dft: forward over {} samples", n);

        for (k, (re, im)) in self.real.iter_mut().zip(self.imag.iter_mut()).enumerate() {
            let mut acc_re = 0.0f32;
            let mut acc_im = 0.0f32;
            for (j, &sample) in buffer.iter().enumerate() {
                let idx = k * j;
                acc_re += self.cos_table[idx] * sample;
                acc_im += self.sin_table[idx] * sample;
            }
            *re = acc_re;
            *im = acc_im;
        }
        self.spectrum.update(&self.real, &self.imag);
        Ok(&self.spectrum)
    }

    fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            NaiveTransform::new(0, 8).err(),
            Some(TransformError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn oversized_tables_are_rejected() {
        // (N/2)·N overflows usize.
        let size = usize::MAX / 2 + 1;
        assert_eq!(
            NaiveTransform::new(size, 1).err(),
            Some(TransformError::InvalidSize { size })
        );
        // (N/2)·N fits in usize but not in an allocation.
        let size = 1usize << (usize::BITS / 2);
        assert_eq!(
            NaiveTransform::new(size, 1).err(),
            Some(TransformError::InvalidSize { size })
        );
    }

    #[test]
    fn odd_sizes_are_supported() {
        let mut dft = NaiveTransform::new(5, 5).unwrap();
        let spectrum = dft.forward(&[2.0; 5]).unwrap();
        assert_eq!(spectrum.len(), 2);
        assert!((spectrum[0] - 4.0).abs() < 1e-5, "dc = {}", spectrum[0]);
        assert!(spectrum[1].abs() < 1e-5);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let mut dft = NaiveTransform::new(8, 8).unwrap();
        assert_eq!(
            dft.forward(&[0.0; 9]).err(),
            Some(TransformError::SizeMismatch {
                expected: 8,
                actual: 9
            })
        );
    }

    #[test]
    fn accumulates_only_the_given_buffer() {
        let mut dft = NaiveTransform::new(4, 4).unwrap();
        dft.forward(&[5.0, -3.0, 2.0, 7.0]).unwrap();
        let spectrum = dft.forward(&[0.0; 4]).unwrap();
        assert!(spectrum.iter().all(|&m| m == 0.0));
    }
}
