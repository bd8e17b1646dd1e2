#![cfg(test)]

use chrono::Weekday;
use strum::IntoEnumIterator;

use crate::predict::{
    ClockTime, Day, FixedPredictor, PredictError, PredictionRequest, Predictor, UniformPredictor,
};

fn request(day: &str, time: &str) -> Result<PredictionRequest, serde_json::Error> {
    serde_json::from_value(serde_json::json!({ "day": day, "time": time }))
}

#[test]
fn parses_form_values() {
    let parsed = request("monday", "08:30").expect("valid request");
    assert_eq!(parsed.day, Day::Monday);
    assert_eq!((parsed.time.hour(), parsed.time.minute()), (8, 30));
    assert_eq!(parsed.time_window(), "08:30 - monday");
}

#[test]
fn rejects_malformed_form_values() {
    assert!(request("Funday", "08:30").is_err());
    assert!(request("monday", "8.30").is_err());
    assert!(request("monday", "25:00").is_err());
    assert_eq!(
        ClockTime::parse("noon"),
        Err(PredictError::InvalidTime("noon".to_string()))
    );
    assert_eq!(
        Day::parse("Mon"),
        Err(PredictError::InvalidDay("Mon".to_string()))
    );
}

#[test]
fn every_day_round_trips_its_name() {
    for day in Day::iter() {
        assert_eq!(Day::parse(&day.to_string()), Ok(day));
    }
    assert_eq!(Weekday::from(Day::Sunday), Weekday::Sun);
}

#[test]
fn uniform_predictor_stays_in_range() {
    let request = request("friday", "17:10").expect("valid request");

    for _ in 0..256 {
        let prediction = UniformPredictor.predict(&request).expect("always predicts");
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert_eq!(prediction.time_window, "17:10 - friday");
    }
}

#[test]
fn prediction_uses_camel_case() {
    let request = request("sunday", "06:05").expect("valid request");
    let prediction = FixedPredictor(0.25).predict(&request).expect("in range");

    let value = serde_json::to_value(&prediction).unwrap();
    assert_eq!(value, serde_json::json!({ "probability": 0.25, "timeWindow": "06:05 - sunday" }));
}

#[test]
fn out_of_range_fixed_predictor_fails() {
    let request = request("sunday", "06:05").expect("valid request");
    assert!(matches!(
        FixedPredictor(1.5).predict(&request),
        Err(PredictError::Unavailable(_))
    ));
}
