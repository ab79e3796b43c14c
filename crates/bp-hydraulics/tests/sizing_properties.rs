use bp_hydraulics::calculator::{power_tier_hp, shaft_power_hp};
use bp_hydraulics::{HydraulicsError, PipeDiameter, PipeMaterial, SystemRequirements, calculate};
use proptest::prelude::*;

fn requirements() -> impl Strategy<Value = SystemRequirements> {
    (
        (100.0_f64..50_000.0, 1_u32..200, 10.0_f64..500.0, 0.5_f64..24.0),
        (1.0_f64..150.0, 0.0_f64..30.0, 1.0_f64..500.0),
        (0usize..6, prop::bool::ANY),
        (0.0_f64..100.0, 30.0_f64..90.0, 1.0_f64..20.0),
    )
        .prop_map(
            |(
                (yield_lph, taps, demand_per_tap_l, pumping_hours),
                (installation_depth_m, tank_height_m, pipe_length_m),
                (diameter_idx, galvanised),
                (safety_margin_pct, efficiency_pct, head_per_stage_m),
            )| SystemRequirements {
                yield_lph,
                taps,
                demand_per_tap_l,
                pumping_hours,
                installation_depth_m,
                tank_height_m,
                pipe_length_m,
                pipe_diameter: PipeDiameter::ALL[diameter_idx],
                pipe_material: if galvanised {
                    PipeMaterial::Gi
                } else {
                    PipeMaterial::Pvc
                },
                safety_margin_pct,
                efficiency_pct,
                head_per_stage_m,
            },
        )
}

proptest! {
    #[test]
    fn tdh_never_below_static_head(req in requirements()) {
        match calculate(&req) {
            Ok(r) => {
                prop_assert!(r.tdh_m >= r.static_head_m);
                prop_assert!(r.friction_loss_m >= 0.0);
                prop_assert!(r.minor_losses_m >= 0.0);
                prop_assert!(r.velocity_head_m >= 0.0);
                prop_assert!(r.safety_addition_m >= 0.0);
            }
            Err(HydraulicsError::DemandExceedsYield { flow_lph, yield_lph }) => {
                prop_assert!(flow_lph > yield_lph);
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    #[test]
    fn tdh_is_sum_of_terms(req in requirements()) {
        if let Ok(r) = calculate(&req) {
            let sum = r.static_head_m + r.pipe_loss_m() + r.velocity_head_m + r.safety_addition_m;
            prop_assert!((r.tdh_m - sum).abs() <= 1e-9 * r.tdh_m.max(1.0));
        }
    }

    #[test]
    fn power_tier_floor_and_bias(hp in 0.0_f64..200.0) {
        let tier = power_tier_hp(hp);
        prop_assert!(tier >= 0.5);
        prop_assert!(tier >= hp - 0.1 - 1e-9);
    }

    #[test]
    fn calculated_tier_covers_shaft_power(req in requirements()) {
        if let Ok(r) = calculate(&req) {
            prop_assert!(r.hp_rounded >= 0.5);
            prop_assert!(r.hp_rounded >= r.hp - 0.1 - 1e-9);
            let hp = shaft_power_hp(r.flow_m3ps, r.tdh_m, req.efficiency_pct);
            prop_assert_eq!(hp, r.hp);
        }
    }

    #[test]
    fn calculation_is_repeatable(req in requirements()) {
        prop_assert_eq!(calculate(&req), calculate(&req));
    }
}
