// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Property-Based Tests (proptest) for transient-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for transient-types using proptest.
//!
//! Covers: configuration validation bounds, JSON roundtrip of config
//! sections, PhotosphereResult column alignment.

use proptest::prelude::*;
use transient_types::config::{DenseCoreConfig, EigenConfig, ExtinctionLaw, ModelConfig};
use transient_types::state::PhotosphereResult;

// ── Config Validation ────────────────────────────────────────────────

proptest! {
    /// Any slope > 1 with positive temperature and threshold is accepted.
    #[test]
    fn densecore_valid_region_accepted(
        slope in 1.001f64..50.0,
        temperature in 1.0f64..1.0e6,
        threshold in 0.01f64..10.0,
    ) {
        let cfg = DenseCoreConfig {
            envelope_slope: slope,
            initial_temperature: temperature,
            envelope_tau_threshold: threshold,
        };
        prop_assert!(cfg.validate().is_ok());
    }

    /// Slopes at or below 1 make the envelope mass diverge and are rejected.
    #[test]
    fn densecore_shallow_slope_rejected(slope in -10.0f64..=1.0) {
        let cfg = DenseCoreConfig { envelope_slope: slope, ..Default::default() };
        prop_assert!(cfg.validate().is_err());
    }

    /// Non-positive R_V is rejected for either component.
    #[test]
    fn eigen_nonpositive_rv_rejected(rv in -5.0f64..=0.0, host in any::<bool>()) {
        let mut cfg = EigenConfig::default();
        if host { cfg.rv_host = rv; } else { cfg.rv_mw = rv; }
        prop_assert!(cfg.validate().is_err());
    }

    /// Config survives a JSON roundtrip unchanged.
    #[test]
    fn model_config_json_roundtrip(
        slope in 1.5f64..20.0,
        rv_host in 1.0f64..6.0,
        seed in proptest::option::of(any::<u64>()),
        ccm in any::<bool>(),
    ) {
        let cfg = ModelConfig {
            model_name: "prop".to_string(),
            densecore: DenseCoreConfig { envelope_slope: slope, ..Default::default() },
            eigen: EigenConfig {
                law: if ccm { ExtinctionLaw::Ccm89 } else { ExtinctionLaw::Odonnell94 },
                rv_host,
                seed,
                ..Default::default()
            },
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ModelConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.densecore.envelope_slope, slope);
        prop_assert_eq!(back.eigen.rv_host, rv_host);
        prop_assert_eq!(back.eigen.seed, seed);
        prop_assert_eq!(back.eigen.law, cfg.eigen.law);
    }
}

// ── PhotosphereResult ────────────────────────────────────────────────

proptest! {
    /// Radius and temperature columns always have the same length.
    #[test]
    fn photosphere_columns_aligned(values in proptest::collection::vec((1.0f64..1e16, 1.0f64..1e5), 0..64)) {
        let mut result = PhotosphereResult::with_capacity(values.len());
        for &(r, t) in &values {
            result.push(r, t);
        }
        prop_assert_eq!(result.len(), values.len());
        prop_assert_eq!(result.radius_phot.len(), result.temperature_phot.len());
        prop_assert_eq!(result.is_empty(), values.is_empty());
    }
}
