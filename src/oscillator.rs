//! Wavetable oscillators.
//!
//! Every waveform is a pure function of phase ([`Waveform::sample`]). An
//! [`Oscillator`] never evaluates it per sample; it reads a precomputed table
//! handed out by a [`WavetableCache`]. The cache is an ordinary value owned by
//! the caller, so oscillators built from the same cache share tables without
//! any process-wide state.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;

use hashbrown::HashMap;
use libm::{fabsf, round, roundf, sinf};

use crate::envelope::Adsr;
use crate::transform::TransformConfig;
use crate::BufferProcessor;

/// Number of samples in one period of a generated wavetable.
pub const WAVETABLE_LENGTH: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

impl Waveform {
    /// Value of one period at `phase` in `[0, 1)`.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => sinf(2.0 * PI * phase),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * (phase - roundf(phase)),
            Waveform::Triangle => 1.0 - 4.0 * fabsf(roundf(phase) - phase),
        }
    }
}

/// Shared wavetables keyed by `(waveform, length)`.
#[derive(Debug, Default)]
pub struct WavetableCache {
    tables: HashMap<(Waveform, usize), Arc<[f32]>>,
}

impl WavetableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding one period of `waveform` sampled at `length` points.
    ///
    /// Computed on first request; later requests return the same allocation.
    pub fn get(&mut self, waveform: Waveform, length: usize) -> Arc<[f32]> {
        let table = self.tables.entry((waveform, length)).or_insert_with(|| {
            debug_log!("wavetable: generating {:?} x {}", waveform, length);
            let table: Vec<f32> = (0..length)
                .map(|i| waveform.sample(i as f32 / length as f32))
                .collect();
            Arc::from(table)
        });
        Arc::clone(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

/// Frame-based wavetable oscillator filling one `buffer_size` signal per call.
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    frequency: f32,
    amplitude: f32,
    config: TransformConfig,
    table: Arc<[f32]>,
    frame_count: u64,
    signal: Vec<f32>,
}

impl Oscillator {
    pub fn new(
        waveform: Waveform,
        frequency: f32,
        amplitude: f32,
        config: TransformConfig,
        cache: &mut WavetableCache,
    ) -> Self {
        Self {
            waveform,
            frequency,
            amplitude,
            config,
            table: cache.get(waveform, WAVETABLE_LENGTH),
            frame_count: 0,
            signal: vec![0.0; config.buffer_size()],
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.frame_count = 0;
    }

    /// Raw table value at `offset`, wrapped to the table length.
    pub fn value_at(&self, offset: usize) -> f32 {
        self.table[offset % self.table.len()]
    }

    /// Last generated (and possibly mixed or enveloped) signal.
    pub fn signal(&self) -> &[f32] {
        &self.signal
    }

    /// Fill the signal buffer with the next frame and advance the frame counter.
    pub fn generate(&mut self) -> &[f32] {
        let table_len = self.table.len();
        let sample_rate = self.config.sample_rate();
        if table_len == 0 || sample_rate == 0 {
            self.signal.fill(0.0);
            return &self.signal;
        }
        let step = table_len as f64 * f64::from(self.frequency) / f64::from(sample_rate);
        let frame_offset = self.frame_count * self.signal.len() as u64;
        for (i, out) in self.signal.iter_mut().enumerate() {
            let position = (frame_offset + i as u64) as f64 * step;
            // Nearest table entry; negative frequencies wrap from the end.
            let offset = (round(position) as i64).rem_euclid(table_len as i64) as usize;
            *out = self.table[offset] * self.amplitude;
        }
        self.frame_count += 1;
        &self.signal
    }

    /// Add `other` element-wise into the signal, over the shorter of the two lengths.
    pub fn add_signal(&mut self, other: &[f32]) -> &[f32] {
        for (out, &x) in self.signal.iter_mut().zip(other.iter()) {
            *out += x;
        }
        &self.signal
    }

    /// Shape the current signal with `envelope`, advancing it one step per sample.
    pub fn apply_envelope(&mut self, envelope: &mut Adsr) -> &[f32] {
        envelope.process(&mut self.signal);
        &self.signal
    }
}
