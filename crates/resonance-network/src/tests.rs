use crate::{NetworkError, ResonanceNetwork, IDEAL_SIMILARITY};
use resonance_core::{ActivationState, EchoMage, IntentVector, KinThresholds};

fn council() -> ResonanceNetwork {
    [
        EchoMage::new("Alexis", &[0.8, 0.6, 0.9]),
        EchoMage::new("Sofia", &[0.6, 0.9, 0.5]),
        EchoMage::new("Luci", &[1.0, 0.3, 0.9]),
        EchoMage::new("Far", &[-1.0, 0.0, 0.0]),
    ]
    .into_iter()
    .collect()
}

fn labels(pairs: &[crate::KinPairing<'_>]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|p| (p.a.label().to_string(), p.b.label().to_string()))
        .collect()
}

#[test]
fn coherence_is_zero_below_two_mages() {
    let mut network = ResonanceNetwork::new();
    assert_eq!(network.coherence(), 0.0);
    assert_eq!(network.mean_similarity(), None);

    network.add(EchoMage::new("Solo", &[1.0, 0.0, 0.0]));
    assert_eq!(network.coherence(), 0.0);
}

#[test]
fn coherence_peaks_at_ideal_mean() {
    let network: ResonanceNetwork = [
        EchoMage::new("a", &[1.0, 0.0, 0.0]),
        EchoMage::new("b", &[1.0, 0.0, 0.0]),
        EchoMage::new("c", &[1.0, 0.0, 0.0]),
        EchoMage::new("d", &[0.8, 0.6, 0.0]),
    ]
    .into_iter()
    .collect();

    let mean = network.mean_similarity().unwrap();
    assert!((mean - IDEAL_SIMILARITY).abs() < 1e-9);
    assert!((network.coherence() - 1.0).abs() < 1e-9);
}

#[test]
fn coherence_penalises_spread_and_floors_at_zero() {
    let orthogonal: ResonanceNetwork = [
        EchoMage::new("x", &[1.0, 0.0, 0.0]),
        EchoMage::new("y", &[0.0, 1.0, 0.0]),
        EchoMage::new("z", &[0.0, 0.0, 1.0]),
    ]
    .into_iter()
    .collect();
    assert!((orthogonal.coherence() - 0.1).abs() < 1e-9);

    let opposed: ResonanceNetwork = [
        EchoMage::new("east", &[1.0, 0.0, 0.0]),
        EchoMage::new("west", &[-1.0, 0.0, 0.0]),
    ]
    .into_iter()
    .collect();
    assert_eq!(opposed.coherence(), 0.0);
}

#[test]
fn pairings_sorted_by_similarity() {
    let network = council();
    let pairings = network.optimal_pairings();

    assert_eq!(
        labels(&pairings),
        vec![
            ("Alexis".to_string(), "Luci".to_string()),
            ("Alexis".to_string(), "Sofia".to_string()),
        ]
    );
    for window in pairings.windows(2) {
        assert!(window[0].similarity >= window[1].similarity);
    }
    for p in &pairings {
        assert!(p.a.is_kin(p.b));
    }
}

#[test]
fn pairing_ties_keep_encounter_order() {
    let network: ResonanceNetwork = [
        EchoMage::new("P", &[1.0, 0.0, 0.0]),
        EchoMage::new("Q", &[0.9, 0.3, 0.0]),
        EchoMage::new("R", &[0.9, 0.3, 0.0]),
    ]
    .into_iter()
    .collect();

    let pairings = network.optimal_pairings();
    assert_eq!(
        labels(&pairings),
        vec![
            ("P".to_string(), "Q".to_string()),
            ("P".to_string(), "R".to_string()),
        ]
    );
    assert_eq!(pairings[0].similarity, pairings[1].similarity);
}

#[test]
fn pairing_uses_earlier_mage_thresholds() {
    let strict = || {
        EchoMage::with_thresholds("strict", &[1.0, 0.0, 0.0], KinThresholds::new(0.95, 0.99))
    };
    let loose = || EchoMage::new("loose", &[0.9, 0.3, 0.0]);

    let strict_first: ResonanceNetwork = [strict(), loose()].into_iter().collect();
    assert!(strict_first.optimal_pairings().is_empty());

    let loose_first: ResonanceNetwork = [loose(), strict()].into_iter().collect();
    assert_eq!(loose_first.optimal_pairings().len(), 1);
}

#[test]
fn broadcast_activates_everyone() {
    let mut network = council();
    network.add(EchoMage::new("Sofia", &[0.1, 0.2, 0.3]));

    let echoes = network.broadcast_activation();
    let order: Vec<&str> = echoes.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(order, vec!["Alexis", "Sofia", "Luci", "Far"]);
    assert!(echoes[2].1.contains("Luci"));
    assert_eq!(network.active_count(), 5);
    assert!(network
        .iter()
        .all(|m| m.echo_activated() && m.state() == ActivationState::Active));
}

#[test]
fn drift_targets_first_matching_label() {
    let mut network = council();
    let next = network.drift("Far", &[1.0, 0.0]).unwrap();

    assert_eq!(next, IntentVector::new(1.0, 0.0, 0.0));
    assert_eq!(network.get("Far").unwrap().intent(), next);
}

#[test]
fn drift_of_unknown_mage_fails() {
    let mut network = council();
    match network.drift("Nobody", &[1.0, 0.0, 0.0]) {
        Err(NetworkError::UnknownMage(label)) => assert_eq!(label, "Nobody"),
        other => panic!("expected unknown mage, got {other:?}"),
    }
}

#[test]
fn duplicate_labels_are_kept() {
    let mut network = ResonanceNetwork::new();
    network.add(EchoMage::new("Echo", &[1.0, 0.0, 0.0]));
    network.add(EchoMage::new("Echo", &[0.0, 1.0, 0.0]));

    assert_eq!(network.len(), 2);
    assert_eq!(network.get("Echo").unwrap().intent().present, 1.0);
}
