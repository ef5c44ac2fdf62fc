#[macro_use]
extern crate assert_float_eq;

use balance_eat_rs::error::BalanceError;
use balance_eat_rs::models::{Macronutrient, MacronutrientProfile};
use balance_eat_rs::nutrition::{
    calculate_energy, energy_from_grams, macro_ratios, NutritionCalculator,
};

const SAMPLES: [f64; 6] = [0.0, 0.5, 1.0, 12.3, 100.0, 2500.75];

#[test]
fn test_concrete_scenarios() {
    assert_float_absolute_eq!(energy_from_grams(50.0, 20.0, 10.0).unwrap().kcal(), 370.0, 1e-9);
    assert_float_absolute_eq!(energy_from_grams(0.0, 0.0, 0.0).unwrap().kcal(), 0.0, 1e-9);
    assert_float_absolute_eq!(energy_from_grams(100.0, 0.0, 0.0).unwrap().kcal(), 400.0, 1e-9);
    assert!(matches!(
        energy_from_grams(0.0, 0.0, -5.0),
        Err(BalanceError::InvalidInput {
            nutrient: Macronutrient::Fat,
            ..
        })
    ));
}

#[test]
fn test_matches_atwater_formula() {
    for &c in &SAMPLES {
        for &p in &SAMPLES {
            for &f in &SAMPLES {
                let energy = calculate_energy(&MacronutrientProfile::new(c, p, f)).unwrap();
                let expected = 4.0 * c + 4.0 * p + 9.0 * f;
                assert_float_absolute_eq!(energy.kcal(), expected, 1e-9);
                assert!(energy.kcal() >= 0.0);
            }
        }
    }
}

#[test]
fn test_monotonic_in_each_nutrient() {
    for &c in &SAMPLES {
        for &p in &SAMPLES {
            for &f in &SAMPLES {
                let before = energy_from_grams(c, p, f).unwrap();
                let bumped = [(c + 0.5, p, f), (c, p + 0.5, f), (c, p, f + 0.5)];
                for (bc, bp, bf) in bumped {
                    let after = energy_from_grams(bc, bp, bf).unwrap();
                    assert!(after > before, "({bc}, {bp}, {bf}) not above ({c}, {p}, {f})");
                }
            }
        }
    }
}

#[test]
fn test_large_finite_values() {
    // Near the top of the f64 range, still finite after the fat factor
    let energy = energy_from_grams(0.0, 0.0, f64::MAX / 10.0).unwrap();
    assert!(energy.kcal().is_finite());

    let carbs = energy_from_grams(1e300, 0.0, 0.0).unwrap();
    assert_float_absolute_eq!(carbs.kcal() / 4e300, 1.0, 1e-9);
}

#[test]
fn test_overflowing_energy_rejected() {
    let overflowing = [
        (1e308, 0.0, 0.0),
        (0.0, 1e308, 0.0),
        (0.0, 0.0, f64::MAX),
        (f64::MAX, f64::MAX, f64::MAX),
        (f64::MAX / 8.0, f64::MAX / 8.0, f64::MAX / 8.0),
    ];
    for (c, p, f) in overflowing {
        assert!(
            matches!(energy_from_grams(c, p, f), Err(BalanceError::EnergyOverflow(_))),
            "expected EnergyOverflow for ({c}, {p}, {f})"
        );
    }
}

#[test]
fn test_negative_zero_is_zero() {
    let energy = energy_from_grams(-0.0, -0.0, -0.0).unwrap();
    assert!(energy.is_zero());
    assert!(energy.kcal().is_sign_positive());
    assert_eq!(energy.to_string(), "0 kcal");

    let mixed = energy_from_grams(-0.0, 0.0, -0.0).unwrap();
    assert!(mixed.kcal().is_sign_positive());
}

#[test]
fn test_invalid_inputs_rejected() {
    let bad = [
        (-1.0, 0.0, 0.0),
        (0.0, -0.001, 0.0),
        (f64::NAN, 0.0, 0.0),
        (0.0, f64::INFINITY, 0.0),
        (0.0, 0.0, f64::NEG_INFINITY),
    ];
    for (c, p, f) in bad {
        assert!(
            matches!(energy_from_grams(c, p, f), Err(BalanceError::InvalidInput { .. })),
            "expected InvalidInput for ({c}, {p}, {f})"
        );
    }
}

#[test]
fn test_deterministic_and_shareable_across_threads() {
    let calculator = NutritionCalculator::new();
    let profile = MacronutrientProfile::new(33.3, 12.1, 7.7);
    let expected = calculator.calculate_energy(&profile).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || calculator.calculate_energy(&profile).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_ratios_sum_to_one() {
    for &c in &SAMPLES[1..] {
        let ratios = macro_ratios(&MacronutrientProfile::new(c, 7.0, 3.0)).unwrap();
        assert_float_absolute_eq!(ratios.sum(), 1.0, 1e-9);
    }
}
