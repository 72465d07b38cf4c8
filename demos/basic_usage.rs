//! Generate a windowed tone and print the strongest bins of its spectrum.
use spectrakit::window::apply;
use spectrakit::{
    FastTransform, FourierTransform, Oscillator, TransformConfig, Waveform, WavetableCache,
    WindowKind,
};

fn main() -> Result<(), spectrakit::TransformError> {
    let config = TransformConfig::new(1024, 44_100);
    let mut cache = WavetableCache::new();
    let mut osc = Oscillator::new(Waveform::Saw, 440.0, 0.8, config, &mut cache);
    let mut fft = FastTransform::new(config.buffer_size(), config.sample_rate())?;

    let mut buffer = osc.generate().to_vec();
    apply(WindowKind::Hann, &mut buffer);
    let spectrum = fft.forward(&buffer)?;

    let mut bins: Vec<(usize, f32)> = spectrum.iter().copied().enumerate().collect();
    bins.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (k, magnitude) in bins.iter().take(5) {
        println!(
            "bin {k:4} {:8.1} Hz  magnitude {magnitude:.4}",
            config.bin_frequency(*k)
        );
    }
    Ok(())
}
