use atiswx::{classify, classify_ceiling, classify_visibility, extract_visibility, FlightCategory, WeatherRecord};

const CEILINGS: [u32; 7] = [0, 499, 500, 999, 1000, 3000, 3001];
const VISIBILITIES: [f64; 7] = [0.0, 0.99, 1.0, 2.99, 3.0, 5.0, 5.01];

#[test]
fn boundary_grid_takes_most_restrictive() {
    let expected_ceiling = [
        FlightCategory::Lifr,
        FlightCategory::Lifr,
        FlightCategory::Ifr,
        FlightCategory::Ifr,
        FlightCategory::Mvfr,
        FlightCategory::Mvfr,
        FlightCategory::Vfr,
    ];
    let expected_visibility = expected_ceiling;

    for (ceiling, ceiling_category) in CEILINGS.iter().zip(expected_ceiling) {
        assert_eq!(classify_ceiling(Some(*ceiling)), ceiling_category);

        for (visibility, visibility_category) in VISIBILITIES.iter().zip(expected_visibility) {
            assert_eq!(classify_visibility(Some(*visibility)), visibility_category);

            let category = classify(Some(*ceiling), Some(*visibility));
            let worst = if ceiling_category.rank() <= visibility_category.rank() {
                ceiling_category
            } else {
                visibility_category
            };
            assert_eq!(category, worst, "ceiling {ceiling} visibility {visibility}");
        }
    }
}

#[test]
fn missing_values_count_as_vfr() {
    for ceiling in CEILINGS {
        assert_eq!(classify(Some(ceiling), None), classify_ceiling(Some(ceiling)));
    }
    for visibility in VISIBILITIES {
        assert_eq!(classify(None, Some(visibility)), classify_visibility(Some(visibility)));
    }
    assert_eq!(classify(None, None), FlightCategory::Vfr);
}

#[test]
fn metric_visibility_is_monotonic_and_saturates() {
    let mut previous = 0.0;
    for meters in 0..=9999 {
        let visibility = extract_visibility(&format!("{meters:04}")).unwrap();
        assert!(visibility >= previous, "{meters}m gave {visibility} after {previous}");
        assert!(visibility <= 10.0);
        previous = visibility;
    }
    assert_eq!(previous, 10.0);
}

#[test]
fn ceiling_order_does_not_matter() {
    let forward = WeatherRecord::parse("BKN008 OVC015 VV030");
    let reverse = WeatherRecord::parse("VV030 OVC015 BKN008");
    assert_eq!(forward.ceiling_ft, Some(800));
    assert_eq!(forward, reverse);
    assert_eq!(forward.flight_category, Some(FlightCategory::Ifr));
}

#[test]
fn first_wind_and_altimeter_groups_win() {
    let record = WeatherRecord::parse("18010KT A2980 TEMPO 22025G35KT Q1030");
    assert_eq!(record.wind_direction_deg, Some(180));
    assert_eq!(record.wind_speed_kt, Some(10));
    assert_eq!(record.wind_gust_kt, None);
    assert_eq!(record.altimeter_inhg, Some(29.80));
}
