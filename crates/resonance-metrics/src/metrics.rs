use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use resonance_network::ResonanceNetwork;

/// Gauges describing one resonance network.
pub struct NetworkMetrics {
    pub coherence: Gauge,
    pub mages: Gauge,
    pub kin_pairings: Gauge,
    pub active_mages: Gauge,
    pub mage_kin_count: GaugeVec,
}

impl NetworkMetrics {
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let coherence = Gauge::new(
            "resonance_network_coherence",
            "Coherence of the network mean pairwise similarity around the ideal",
        )?;
        let mages = Gauge::new("resonance_network_mages", "Mages in the network")?;
        let kin_pairings = Gauge::new(
            "resonance_network_kin_pairings",
            "Kin pairings found across the network",
        )?;
        let active_mages = Gauge::new(
            "resonance_network_active_mages",
            "Mages that have echoed the pulse",
        )?;
        let mage_kin_count = GaugeVec::new(
            Opts::new("resonance_mage_kin_count", "Kin found by each mage"),
            &["mage"],
        )?;

        registry.register(Box::new(coherence.clone()))?;
        registry.register(Box::new(mages.clone()))?;
        registry.register(Box::new(kin_pairings.clone()))?;
        registry.register(Box::new(active_mages.clone()))?;
        registry.register(Box::new(mage_kin_count.clone()))?;

        Ok(Self {
            coherence,
            mages,
            kin_pairings,
            active_mages,
            mage_kin_count,
        })
    }

    pub fn observe(&self, network: &ResonanceNetwork) {
        self.coherence.set(network.coherence());
        self.mages.set(network.len() as f64);
        self.kin_pairings
            .set(network.optimal_pairings().len() as f64);
        self.active_mages.set(network.active_count() as f64);

        for mage in network {
            let kin = mage
                .resonance_field(network.mages())
                .values()
                .filter(|reading| reading.is_kin)
                .count();
            self.mage_kin_count
                .with_label_values(&[mage.label()])
                .set(kin as f64);
        }
    }
}

/// Text exposition of everything in `registry`.
pub fn render(registry: &Registry) -> prometheus::Result<String> {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf)?;
    String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
