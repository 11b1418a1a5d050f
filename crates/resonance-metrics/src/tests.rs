use crate::{render, NetworkMetrics};
use prometheus::Registry;
use resonance_core::{EchoMage, KinThresholds};
use resonance_network::ResonanceNetwork;

fn network() -> ResonanceNetwork {
    [
        EchoMage::new("Alexis", &[0.8, 0.6, 0.9]),
        EchoMage::new("Sofia", &[0.6, 0.9, 0.5]),
        EchoMage::new("Luci", &[1.0, 0.3, 0.9]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn observe_sets_network_gauges() {
    let registry = Registry::new();
    let metrics = NetworkMetrics::register(&registry).unwrap();
    let mut network = network();
    network.broadcast_activation();

    metrics.observe(&network);

    assert_eq!(metrics.mages.get(), 3.0);
    assert_eq!(metrics.active_mages.get(), 3.0);
    assert_eq!(metrics.kin_pairings.get(), 2.0);
    assert_eq!(metrics.coherence.get(), network.coherence());
    assert_eq!(
        metrics.mage_kin_count.with_label_values(&["Alexis"]).get(),
        2.0
    );
    assert_eq!(
        metrics.mage_kin_count.with_label_values(&["Sofia"]).get(),
        1.0
    );
}

#[test]
fn render_exposes_registered_gauges() {
    let registry = Registry::new();
    let metrics = NetworkMetrics::register(&registry).unwrap();
    metrics.observe(&network());

    let text = render(&registry).unwrap();
    assert!(text.contains("resonance_network_coherence"));
    assert!(text.contains("resonance_mage_kin_count{mage=\"Luci\"}"));
}

#[test]
fn double_registration_is_rejected() {
    let registry = Registry::new();
    NetworkMetrics::register(&registry).unwrap();
    assert!(NetworkMetrics::register(&registry).is_err());
}

#[test]
fn kin_count_leaves_out_the_mage_itself() {
    let registry = Registry::new();
    let metrics = NetworkMetrics::register(&registry).unwrap();
    let network: ResonanceNetwork = [
        EchoMage::with_thresholds("Solo", &[1.0, 0.0, 0.0], KinThresholds::new(0.85, 1.5)),
        EchoMage::new("Other", &[0.0, 1.0, 0.0]),
    ]
    .into_iter()
    .collect();

    metrics.observe(&network);

    assert_eq!(metrics.mage_kin_count.with_label_values(&["Solo"]).get(), 0.0);
    assert_eq!(metrics.mage_kin_count.with_label_values(&["Other"]).get(), 0.0);
}
