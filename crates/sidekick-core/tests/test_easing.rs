use approx::assert_abs_diff_eq;
use sidekick_core::animate::Easing;

#[test]
fn test_endpoints_are_stable() {
    for easing in Easing::ALL {
        assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1");
    }
}

#[test]
fn test_ease_in_out_midpoint() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_quadratic_shapes() {
    assert_abs_diff_eq!(Easing::Linear.apply(0.3), 0.3);
    assert_abs_diff_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_abs_diff_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_abs_diff_eq!(Easing::EaseInOut.apply(0.25), 0.125);
    assert_abs_diff_eq!(Easing::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn test_monotonic_spot_check() {
    for easing in Easing::ALL {
        let a = easing.apply(0.25);
        let b = easing.apply(0.5);
        let c = easing.apply(0.75);
        assert!(a < b && b < c, "{easing} is not increasing");
    }
}

#[test]
fn test_default_is_ease_out() {
    assert_eq!(Easing::default(), Easing::EaseOut);
}

#[test]
fn test_names_round_trip_through_from_str() {
    for easing in Easing::ALL {
        let parsed: Easing = easing.to_string().parse().unwrap();
        assert_eq!(parsed, easing);
    }
    assert!("bounce".parse::<Easing>().is_err());
}
