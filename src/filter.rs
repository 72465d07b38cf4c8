//! Resonant IIR filters operating in place on sample buffers.

use core::f32::consts::PI;

use libm::{cosf, powf, sinf};

use crate::BufferProcessor;

/// Two-pole resonant low-pass (12 dB/octave).
///
/// `resonance` is the pole amplitude: `1.0` is a mild bump at the cutoff and
/// larger values ring more. Values below `1.0` are raised to `1.0`, where the
/// pole magnitude would otherwise leave the unit circle.
#[derive(Debug, Clone)]
pub struct ResonantLowPass {
    cutoff: f32,
    resonance: f32,
    sample_rate: u32,
    r: f32,
    c: f32,
    position: f32,
    speed: f32,
}

impl ResonantLowPass {
    pub fn new(cutoff: f32, resonance: f32, sample_rate: u32) -> Self {
        let mut filter = Self {
            cutoff,
            resonance,
            sample_rate,
            r: 0.0,
            c: 0.0,
            position: 0.0,
            speed: 0.0,
        };
        filter.set(cutoff, resonance);
        filter
    }

    /// Recompute coefficients; filter state is kept.
    pub fn set(&mut self, cutoff: f32, resonance: f32) {
        self.cutoff = cutoff;
        self.resonance = resonance.max(1.0);
        let w = 2.0 * PI * cutoff / self.sample_rate as f32;
        let q = 1.0 - w / (2.0 * (self.resonance + 0.5 / (1.0 + w)) + w - 2.0);
        self.r = q * q;
        self.c = self.r + 1.0 - 2.0 * cosf(w) * q;
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
        self.speed = 0.0;
    }
}

impl BufferProcessor for ResonantLowPass {
    fn process(&mut self, buffer: &mut [f32]) {
        for x in buffer.iter_mut() {
            self.speed += (*x - self.position) * self.c;
            self.position += self.speed;
            self.speed *= self.r;
            *x = self.position;
        }
    }
}

/// Output tap of a [`StateVariableFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
    BandPass,
    BandReject,
}

impl FilterMode {
    const fn tap(self) -> usize {
        match self {
            FilterMode::LowPass => 0,
            FilterMode::HighPass => 1,
            FilterMode::BandPass => 2,
            FilterMode::BandReject => 3,
        }
    }
}

/// Chamberlin state-variable filter, run twice per sample for stability at
/// high cutoffs. `resonance` is in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct StateVariableFilter {
    mode: FilterMode,
    cutoff: f32,
    resonance: f32,
    sample_rate: u32,
    freq: f32,
    damp: f32,
    /// Low-pass, high-pass, band-pass and band-reject taps.
    state: [f32; 4],
}

impl StateVariableFilter {
    pub fn new(mode: FilterMode, cutoff: f32, resonance: f32, sample_rate: u32) -> Self {
        let mut filter = Self {
            mode,
            cutoff,
            resonance,
            sample_rate,
            freq: 0.0,
            damp: 0.0,
            state: [0.0; 4],
        };
        filter.set(cutoff, resonance);
        filter
    }

    /// Recompute coefficients; filter state is kept.
    pub fn set(&mut self, cutoff: f32, resonance: f32) {
        self.cutoff = cutoff;
        self.resonance = resonance.clamp(0.0, 1.0);
        let normalized = (cutoff / (self.sample_rate as f32 * 2.0)).min(0.25);
        self.freq = 2.0 * sinf(PI * normalized);
        self.damp = (2.0 * (1.0 - powf(self.resonance, 0.25)))
            .min((2.0f32).min(2.0 / self.freq - self.freq * 0.5));
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    pub fn reset(&mut self) {
        self.state = [0.0; 4];
    }

    fn iterate(&mut self, input: f32) -> f32 {
        let s = &mut self.state;
        s[3] = input - self.damp * s[2];
        s[0] += self.freq * s[2];
        s[1] = s[3] - s[0];
        s[2] += self.freq * s[1];
        0.5 * s[self.mode.tap()]
    }
}

impl BufferProcessor for StateVariableFilter {
    fn process(&mut self, buffer: &mut [f32]) {
        for x in buffer.iter_mut() {
            let input = *x;
            *x = self.iterate(input) + self.iterate(input);
        }
    }
}
