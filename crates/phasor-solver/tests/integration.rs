//! End-to-end tests through the high-level analysis API.

use std::f64::consts::PI;

use phasor_core::NodeId;
use phasor_solver::{Error, LinearAcSweep, LinearDcAnalysis};

#[test]
fn dc_divider_end_to_end() {
    let mut dc = LinearDcAnalysis::new();
    dc.add_resistor(1, 0, 100.0).unwrap();
    dc.add_resistor(2, 1, 100.0).unwrap();
    dc.add_independent_voltage_source(2, 0, 5.0, 0.0).unwrap();

    let solution = dc.solve().unwrap();

    let voltages: Vec<(u32, f64)> = solution
        .voltages()
        .map(|(n, v)| (n.as_u32(), v))
        .collect();
    assert_eq!(voltages.len(), 2);
    assert_eq!(voltages[0].0, 1);
    assert_eq!(voltages[1].0, 2);
    assert!((voltages[0].1 - 2.5).abs() < 1e-10);
    assert!((voltages[1].1 - 5.0).abs() < 1e-10);

    let currents = solution.source_currents();
    assert_eq!(currents.len(), 1);
    // 25mA around the loop, flowing into the source's positive terminal.
    assert!((currents[0] + 0.025).abs() < 1e-10);
}

#[test]
fn rc_lowpass_bode_end_to_end() {
    // R=1k, C=100n → f_3dB ≈ 1592 Hz
    let r = 1000.0;
    let c = 100e-9;
    let f3db = 1.0 / (2.0 * PI * r * c);

    let mut ac = LinearAcSweep::logarithmic(10.0, 1e6, 101).unwrap();
    ac.add_independent_voltage_source(1, 0, 1.0, 0.0).unwrap();
    ac.add_resistor(1, 2, r).unwrap();
    ac.add_capacitor(2, 0, c).unwrap();

    let result = ac.solve().unwrap();
    let mag = result.magnitude(NodeId::new(2)).unwrap();

    // |H| = 1/sqrt(1 + (f/f_3dB)^2) at every point
    for (f, m) in mag {
        let expected = 1.0 / (1.0 + (f / f3db).powi(2)).sqrt();
        assert!(
            (m - expected).abs() < 1e-9,
            "at {f:.1} Hz: |V| = {m}, expected {expected}"
        );
    }
}

#[test]
fn notch_filter_end_to_end() {
    // The 22Ω / 0.6Ω / 303pF / 30µH trap, driven by a 5V source.
    let mut ac = LinearAcSweep::new(1e3, 60e6, 10001).unwrap();
    ac.add_resistor(1, 0, 22.0).unwrap();
    ac.add_capacitor(2, 1, 303e-12).unwrap();
    ac.add_inductor(3, 1, 30e-6).unwrap();
    ac.add_resistor(2, 3, 0.6).unwrap();
    ac.add_independent_voltage_source(2, 0, 5.0, 0.0).unwrap();

    let result = ac.solve().unwrap();
    let freqs = result.frequencies();
    assert_eq!(freqs.len(), 10001);
    assert!(freqs.windows(2).all(|w| w[0] < w[1]));

    // Away from resonance the trap passes the source through; at
    // resonance (≈1.67 MHz) node 1 is strongly attenuated.
    let mag = result.magnitude(NodeId::new(1)).unwrap();
    let f0 = 1.0 / (2.0 * PI * (30e-6_f64 * 303e-12).sqrt());
    let (f_min, m_min) = mag
        .iter()
        .copied()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap();
    assert!((f_min - f0).abs() / f0 < 0.01, "notch at {f_min:.0} Hz");
    assert!(m_min < 0.5, "notch depth |V| = {m_min}");
    assert!(mag[0].1 > 4.5, "passband |V| = {}", mag[0].1);
}

#[test]
fn singular_sweep_aborts_with_frequency() {
    let mut ac = LinearAcSweep::new(50.0, 150.0, 3).unwrap();
    ac.add_independent_voltage_source(1, 0, 1.0, 0.0).unwrap();
    ac.add_resistor(4, 5, 10.0).unwrap(); // floating pair

    match ac.solve() {
        Err(Error::SingularSystem {
            frequency: Some(f),
        }) => assert_eq!(f, 50.0),
        other => panic!("expected singular system, got {other:?}"),
    }
}
