//! Demonstrates enabling verbose logging for spectrakit.
use spectrakit::{FastTransform, FourierTransform, NaiveTransform, Waveform, WavetableCache};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut cache = WavetableCache::new();
    let table = cache.get(Waveform::Sine, 64);

    let mut fft = FastTransform::new(64, 64).unwrap();
    let mut dft = NaiveTransform::new(64, 64).unwrap();
    fft.forward(&table).unwrap();
    dft.forward(&table).unwrap();
}
