//! # spectrakit - magnitude spectra for fixed-size sample buffers
//!
//! A small Digital Signal Processing (DSP) toolkit built around a spectral
//! transform engine. Buffers are plain `f32` slices; every transform is sized
//! once at construction and reused for many calls.
//!
//! ## Features
//!
//! - **Radix-2 FFT** ([`FastTransform`]) with precomputed bit-reversal and twiddle tables
//! - **Reference DFT** ([`NaiveTransform`]) for cross-checking and odd sizes
//! - **Window functions**: Bartlett, Blackman, Gauss, Hamming, Hann, Lanczos and more
//! - **Wavetable oscillators** with an explicit, shareable table cache
//! - **ADSR envelopes** and two **resonant IIR filters**
//! - `no_std` + `alloc`, math through `libm`
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`TransformError`]
//! - `verbose-logging`: emit table construction and transform events through `log`
//!
//! ## Example
//!
//! ```
//! use spectrakit::{FastTransform, FourierTransform};
//!
//! let mut fft = FastTransform::new(8, 8).unwrap();
//! let spectrum = fft.forward(&[1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0]).unwrap();
//! assert_eq!(spectrum.len(), 4);
//! assert_eq!(spectrum.peak().unwrap().bin, 2);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Transform configuration, errors and the [`FourierTransform`] trait.
pub mod transform;

/// Magnitude spectrum produced by every transform.
pub mod spectrum;

/// Radix-2 decimation-in-time Fast Fourier Transform.
pub mod fft;

/// Direct-summation Discrete Fourier Transform.
pub mod dft;

/// Analysis window functions.
pub mod window;

/// Wavetable oscillators and the table cache that feeds them.
pub mod oscillator;

/// Attack/decay/sustain/release amplitude envelope.
pub mod envelope;

/// Resonant IIR filters.
pub mod filter;

pub use dft::NaiveTransform;
pub use envelope::Adsr;
pub use fft::FastTransform;
pub use filter::{FilterMode, ResonantLowPass, StateVariableFilter};
pub use oscillator::{Oscillator, Waveform, WavetableCache};
pub use spectrum::{SpectralPeak, Spectrum};
pub use transform::{
    new_transform, FourierTransform, TransformConfig, TransformError, MAX_NAIVE_SIZE,
};
pub use window::WindowKind;

/// In-place processing stage operating on a whole sample buffer.
///
/// Envelopes, filters and windows implement this so they can be chained in
/// front of a transform.
pub trait BufferProcessor {
    fn process(&mut self, buffer: &mut [f32]);
}
