//! Tests for window generation covering edge lengths, symmetry and known values.

use spectrakit::window::{apply, window, BLACKMAN_ALPHA};
use spectrakit::{BufferProcessor, WindowKind};

/// Allowed floating-point error when verifying coefficients.
const EPSILON: f32 = 1e-5;

const ALL: [WindowKind; 10] = [
    WindowKind::Bartlett,
    WindowKind::BartlettHann,
    WindowKind::blackman(),
    WindowKind::Cosine,
    WindowKind::gauss(),
    WindowKind::Hamming,
    WindowKind::Hann,
    WindowKind::Lanczos,
    WindowKind::Rectangular,
    WindowKind::Triangular,
];

/// Helper to find the maximum element in a slice.
fn max(slice: &[f32]) -> f32 {
    slice.iter().copied().fold(f32::MIN, f32::max)
}

fn assert_all_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < EPSILON, "{actual:?} vs {expected:?}");
    }
}

/// Zero- and one-sample windows are degenerate for every kind.
#[test]
fn degenerate_lengths() {
    for kind in ALL {
        assert!(window(kind, 0).is_empty());
        assert_eq!(window(kind, 1), vec![1.0]);
    }
}

/// Every window is symmetric about its center.
#[test]
fn windows_are_symmetric() {
    for kind in ALL {
        for len in [7usize, 16] {
            let w = window(kind, len);
            for i in 0..len {
                assert!(
                    (w[i] - w[len - 1 - i]).abs() < EPSILON,
                    "{kind:?} len {len} index {i}"
                );
            }
        }
    }
}

/// Tapered windows peak at one in the middle of an odd-length window.
#[test]
fn tapered_windows_peak_at_one() {
    for kind in [
        WindowKind::Bartlett,
        WindowKind::blackman(),
        WindowKind::Cosine,
        WindowKind::gauss(),
        WindowKind::Hamming,
        WindowKind::Hann,
        WindowKind::Lanczos,
    ] {
        let w = window(kind, 1025);
        assert!((max(&w) - 1.0).abs() < EPSILON, "{kind:?}");
        assert!((w[512] - 1.0).abs() < EPSILON, "{kind:?}");
    }
}

#[test]
fn known_coefficients() {
    assert_all_close(&window(WindowKind::Bartlett, 5), &[0.0, 0.5, 1.0, 0.5, 0.0]);
    assert_all_close(&window(WindowKind::Triangular, 4), &[0.25, 0.75, 0.75, 0.25]);
    assert_all_close(&window(WindowKind::Rectangular, 3), &[1.0, 1.0, 1.0]);
    assert_all_close(&window(WindowKind::Hann, 3), &[0.0, 1.0, 0.0]);
    assert_all_close(&window(WindowKind::Hamming, 3), &[0.08, 1.0, 0.08]);
    assert_all_close(&window(WindowKind::BartlettHann, 3), &[0.0, 1.0, 0.0]);
    assert_all_close(&window(WindowKind::blackman(), 3), &[0.0, 1.0, 0.0]);
}

#[test]
fn blackman_alpha_moves_endpoints() {
    assert_eq!(
        WindowKind::blackman(),
        WindowKind::Blackman {
            alpha: BLACKMAN_ALPHA
        }
    );
    // Endpoints equal (1 - alpha)/2 - 0.5 + alpha/2 = 0 for any alpha.
    let w = window(WindowKind::Blackman { alpha: 0.3 }, 5);
    assert!(w[0].abs() < EPSILON);
    assert!((w[2] - 1.0).abs() < EPSILON);
}

#[test]
fn narrower_gauss_decays_faster() {
    let wide = window(WindowKind::Gauss { alpha: 0.5 }, 33);
    let narrow = window(WindowKind::Gauss { alpha: 0.2 }, 33);
    assert!(narrow[8] < wide[8]);
}

#[test]
fn apply_and_processor_agree() {
    let mut a = vec![2.0f32; 16];
    let mut b = a.clone();
    apply(WindowKind::Hann, &mut a);
    let mut kind = WindowKind::Hann;
    kind.process(&mut b);
    assert_eq!(a, b);
    let expected: Vec<f32> = window(WindowKind::Hann, 16).iter().map(|w| 2.0 * w).collect();
    assert_all_close(&a, &expected);
}
