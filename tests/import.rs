//! End-to-end scenarios exercised through the public API only.

use sifr::{Number, NumeralSystem};

fn decimal() -> NumeralSystem {
    NumeralSystem::default()
}

#[test]
fn worked_arithmetic_scenarios() {
    let ns = decimal();

    let a = Number::new(&ns, "0.96123724").unwrap();
    let b = Number::new(&ns, "219.8459").unwrap();
    assert_eq!((&a + &b).to_string(), "220.80713724");

    let a = Number::new(&ns, "1.00").unwrap();
    let b = Number::new(&ns, "1.05").unwrap();
    assert_eq!((&a - &b).to_string(), "-0.05");

    let a = Number::new(&ns, "219.8459").unwrap();
    let b = Number::new(&ns, "4").unwrap();
    assert_eq!(a.floor_div(&b).to_string(), "54.0");

    let a = Number::new(&ns, "-31.261234").unwrap();
    let b = Number::new(&ns, "4").unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "-8.0");
    assert_eq!(r.to_string(), "0.738766");
}

#[test]
fn algebraic_properties_hold_over_random_looking_values() {
    let ns = decimal();
    let a = Number::new(&ns, "37.125").unwrap();
    let b = Number::new(&ns, "-12.5").unwrap();
    let c = Number::new(&ns, "4.0").unwrap();

    // commutativity
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&a * &b, &b * &a);

    // a - b == a + (-b)
    assert_eq!(&a - &b, &a + &(-&b));

    // (a / c) * c recovers a when c divides a evenly
    let sixteen = Number::new(&ns, "16.0").unwrap();
    let four = Number::new(&ns, "4.0").unwrap();
    assert_eq!(&(&sixteen / &four) * &four, sixteen);

    // floor division and modulus reconstruct the dividend
    let (q, r) = a.div_rem(&c).unwrap();
    assert_eq!(&(&q * &c) + &r, a);
}

#[test]
fn comparisons_respect_sign_and_magnitude() {
    let ns = decimal();
    let small_positive = Number::new(&ns, "0.01").unwrap();
    let large_negative = Number::new(&ns, "-999.0").unwrap();
    assert!(small_positive > large_negative);

    let neg_one = Number::new(&ns, "-1.0").unwrap();
    let neg_two = Number::new(&ns, "-2.0").unwrap();
    assert!(neg_one > neg_two);

    assert_eq!(Number::new(&ns, "7.10").unwrap(), Number::new(&ns, "7.1").unwrap());
}

#[test]
fn division_by_zero_is_reported_not_panicked() {
    let ns = decimal();
    let a = Number::new(&ns, "5.0").unwrap();
    let zero = Number::zero(&ns);
    assert!(a.checked_div(&zero).is_err());
    assert!(a.div_rem(&zero).is_err());
}

#[test]
fn non_integer_exponents_are_out_of_scope() {
    let ns = decimal();
    let base = Number::new(&ns, "2.0").unwrap();
    let exponent = Number::new(&ns, "0.5").unwrap();
    assert!(base.checked_powi(&exponent).is_err());
}

#[test]
fn a_custom_alphabet_behaves_like_any_other_numeral_system() {
    use sifr::RoundingMode;

    let ns = NumeralSystem::new(['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'], '|', '~', 6, RoundingMode::HalfAway).unwrap();
    // base 8: "ba" is 1*8 + 0 = 8 (decimal); "c" is 2 (decimal)
    let a = Number::new(&ns, "ba").unwrap();
    let b = Number::new(&ns, "c").unwrap();
    // 8 + 2 = 10 decimal = 1*8 + 2 -> glyphs "bc"
    assert_eq!((&a + &b).to_string(), "bc|a");
}
