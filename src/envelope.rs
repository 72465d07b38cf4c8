//! Linear ADSR envelope.
//!
//! Stage lengths are given in seconds and converted to sample counts once.
//! The envelope advances one sample per [`Adsr::value`] call: it ramps 0 → 1
//! over the attack, 1 → sustain level over the decay, holds for the sustain
//! time, then ramps to 0 over the release.

use crate::BufferProcessor;

#[derive(Debug, Clone)]
pub struct Adsr {
    sustain_level: f32,
    attack_samples: usize,
    decay_samples: usize,
    sustain_samples: usize,
    release_samples: usize,

    // Stage end positions, in samples since note on.
    attack: usize,
    decay: usize,
    sustain: usize,
    release: usize,

    /// Level the release ramp starts from.
    release_level: f32,
    samples_processed: usize,
}

fn to_samples(seconds: f32, sample_rate: u32) -> usize {
    if seconds <= 0.0 {
        return 0;
    }
    (seconds * sample_rate as f32) as usize
}

impl Adsr {
    /// Build an idle envelope; call [`note_on`](Self::note_on) to start it.
    pub fn new(
        attack: f32,
        decay: f32,
        sustain_level: f32,
        sustain: f32,
        release: f32,
        sample_rate: u32,
    ) -> Self {
        let mut env = Self {
            sustain_level,
            attack_samples: to_samples(attack, sample_rate),
            decay_samples: to_samples(decay, sample_rate),
            sustain_samples: to_samples(sustain, sample_rate),
            release_samples: to_samples(release, sample_rate),
            attack: 0,
            decay: 0,
            sustain: 0,
            release: 0,
            release_level: sustain_level,
            samples_processed: 0,
        };
        env.update_stages();
        env.samples_processed = env.release;
        env
    }

    fn update_stages(&mut self) {
        self.attack = self.attack_samples;
        self.decay = self.attack + self.decay_samples;
        self.sustain = self.decay + self.sustain_samples;
        self.release = self.sustain + self.release_samples;
    }

    /// Restart from the beginning of the attack.
    pub fn note_on(&mut self) {
        self.update_stages();
        self.release_level = self.sustain_level;
        self.samples_processed = 0;
    }

    /// Start the release now, from whatever level the envelope has reached.
    pub fn note_off(&mut self) {
        let p = self.samples_processed;
        if p >= self.release {
            return;
        }
        self.release_level = self.level_at(p);
        self.attack = self.attack.min(p);
        self.decay = self.decay.min(p);
        self.sustain = p;
        self.release = p + self.release_samples;
    }

    pub fn is_active(&self) -> bool {
        self.samples_processed < self.release
    }

    fn level_at(&self, p: usize) -> f32 {
        if p < self.attack {
            p as f32 / self.attack as f32
        } else if p < self.decay {
            let t = (p - self.attack) as f32 / (self.decay - self.attack) as f32;
            1.0 + (self.sustain_level - 1.0) * t
        } else if p < self.sustain {
            self.sustain_level
        } else if p < self.release {
            let t = (p - self.sustain) as f32 / (self.release - self.sustain) as f32;
            self.release_level * (1.0 - t)
        } else {
            0.0
        }
    }

    /// Current amplitude; advances the envelope by one sample.
    pub fn value(&mut self) -> f32 {
        let amplitude = self.level_at(self.samples_processed);
        self.samples_processed = self.samples_processed.saturating_add(1);
        amplitude
    }
}

impl BufferProcessor for Adsr {
    fn process(&mut self, buffer: &mut [f32]) {
        for x in buffer.iter_mut() {
            *x *= self.value();
        }
    }
}
