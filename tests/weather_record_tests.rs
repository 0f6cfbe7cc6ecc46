use std::fs;

use atiswx::{FlightCategory, WeatherCategory, WeatherRecord};

fn read_mock_data(name: &str) -> String {
    fs::read_to_string(format!("mock/{}", name)).unwrap()
}

#[test]
fn parse_gusty_broken_ceiling() {
    let record = WeatherRecord::parse("27015G25KT 10SM BKN025 A2992");
    assert_eq!(record.wind_direction_deg, Some(270));
    assert_eq!(record.wind_speed_kt, Some(15));
    assert_eq!(record.wind_gust_kt, Some(25));
    assert_eq!(record.visibility_sm, Some(10.0));
    assert_eq!(record.ceiling_ft, Some(2500));
    assert!((record.altimeter_inhg.unwrap() - 29.92).abs() < 0.0001);
    assert_eq!(record.flight_category, Some(FlightCategory::Mvfr));
    assert_eq!(record.weather_category, Some(WeatherCategory::Lvmc));
    assert_eq!(record.summary(), "MVFR 270@15G25 10SM CIG025");
}

#[test]
fn parse_variable_wind_vertical_visibility() {
    let record = WeatherRecord::parse("VRB05KT 1/2SM VV002");
    assert_eq!(record.wind_direction_deg, None);
    assert_eq!(record.wind_speed_kt, Some(5));
    assert_eq!(record.wind_gust_kt, None);
    assert_eq!(record.visibility_sm, Some(0.5));
    assert_eq!(record.ceiling_ft, Some(200));
    assert_eq!(record.altimeter_inhg, None);
    assert_eq!(record.flight_category, Some(FlightCategory::Lifr));
    assert_eq!(record.weather_category, Some(WeatherCategory::Limc));
    assert_eq!(record.summary(), "LIFR VRB@5 0.5SM CIG002");
}

#[test]
fn parse_bare_metric_group() {
    let record = WeatherRecord::parse("9999");
    assert_eq!(
        record,
        WeatherRecord {
            visibility_sm: Some(10.0),
            flight_category: Some(FlightCategory::Vfr),
            weather_category: Some(WeatherCategory::Vmc),
            ..Default::default()
        }
    );
}

#[test]
fn parse_empty_text() {
    let record = WeatherRecord::parse("");
    assert_eq!(record, WeatherRecord::default());
    assert_eq!(record.flight_category, None);
    assert_eq!(record.weather_category, None);
    assert_eq!(record.summary(), "");
}

#[test]
fn parse_qnh_rounds_hectopascal_product_to_two_places() {
    let record = WeatherRecord::parse("Q1013");
    // 1013 * 0.02953 = 29.91389
    assert_eq!(record.altimeter_inhg, Some(29.91));
    assert_eq!(record.flight_category, Some(FlightCategory::Vfr));
}

#[test]
fn parse_greater_than_visibility() {
    let record = WeatherRecord::parse("P6SM");
    assert!((record.visibility_sm.unwrap() - 6.1).abs() < 1e-9);
    assert_eq!(record.flight_category, Some(FlightCategory::Vfr));
}

#[test]
fn read_us_atis() {
    let record = WeatherRecord::parse(&read_mock_data("kjfk_atis.txt"));
    assert_eq!(record.wind_direction_deg, Some(270));
    assert_eq!(record.visibility_sm, Some(10.0));
    assert_eq!(record.ceiling_ft, Some(2500));
    assert_eq!(record.altimeter_inhg, Some(29.92));
    assert_eq!(record.flight_category, Some(FlightCategory::Mvfr));
}

#[test]
fn read_european_metar() {
    let record = WeatherRecord::parse(&read_mock_data("egll_metar.txt"));
    assert_eq!(record.wind_direction_deg, Some(240));
    assert_eq!(record.wind_speed_kt, Some(8));
    assert_eq!(record.visibility_sm, Some(2.5));
    assert_eq!(record.ceiling_ft, Some(1200));
    assert_eq!(record.altimeter_inhg, Some(29.77));
    assert_eq!(record.flight_category, Some(FlightCategory::Ifr));
    assert_eq!(record.weather_category, Some(WeatherCategory::Imc));
    assert_eq!(record.summary(), "IFR 240@8 2.5SM CIG012");
}

#[test]
fn read_multiline_lowercase_metar() {
    let record = WeatherRecord::parse(&read_mock_data("ksfo_metar.txt"));
    assert_eq!(record.wind_direction_deg, Some(290));
    assert_eq!(record.visibility_sm, Some(1.5));
    assert_eq!(record.ceiling_ft, Some(600));
    assert_eq!(record.altimeter_inhg, Some(30.01));
    assert_eq!(record.flight_category, Some(FlightCategory::Ifr));
}

#[test]
fn weather_category_follows_flight_category() {
    let texts = [
        "",
        "   ",
        "NO WX",
        "9999",
        "M1/4SM OVC001",
        "3SM BKN040",
        "2SM",
        "BKN035 P6SM",
    ];
    for text in texts {
        let record = WeatherRecord::parse(text);
        assert_eq!(
            record.weather_category,
            record.flight_category.map(WeatherCategory::from),
            "{text}"
        );
    }
}

#[test]
fn json_has_eight_named_fields() {
    let record = WeatherRecord::parse("VRB05KT 1/2SM VV002");
    let json = record.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 8);
    assert!(object["wind_direction_deg"].is_null());
    assert_eq!(object["wind_speed_kt"], 5);
    assert!(object["wind_gust_kt"].is_null());
    assert_eq!(object["visibility_sm"], 0.5);
    assert_eq!(object["ceiling_ft"], 200);
    assert!(object["altimeter_inhg"].is_null());
    assert_eq!(object["flight_category"], "LIFR");
    assert_eq!(object["weather_category"], "LIMC");

    assert_eq!(WeatherRecord::from_json(&json).unwrap(), record);
    assert!(WeatherRecord::from_json("{\"flight_category\": \"XFR\"}").is_err());
}

#[test]
fn json_categories_are_rederived() {
    let record = WeatherRecord::from_json(
        r#"{"visibility_sm": 10.0, "flight_category": "VFR", "weather_category": "LIMC"}"#,
    )
    .unwrap();
    assert_eq!(record.flight_category, Some(FlightCategory::Vfr));
    assert_eq!(record.weather_category, Some(WeatherCategory::Vmc));

    let record = WeatherRecord::from_json(
        r#"{"visibility_sm": 0.25, "ceiling_ft": 2500, "flight_category": "VFR", "weather_category": "VMC"}"#,
    )
    .unwrap();
    assert_eq!(record.flight_category, Some(FlightCategory::Lifr));
    assert_eq!(record.weather_category, Some(WeatherCategory::Limc));

    let record = WeatherRecord::from_json(r#"{"weather_category": "IMC"}"#).unwrap();
    assert_eq!(record, WeatherRecord::default());
}
