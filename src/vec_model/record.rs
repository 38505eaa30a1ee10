use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;

use super::*;

/// serialized form of a vector, `{"x": .., "y": ..}`
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2Record {
    pub x: f64,
    pub y: f64,
}

impl Vec2Record {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2Record { x, y }
    }

    /// parse a record from json text
    ///
    /// Missing fields and non numeric values are rejected. Json has no NaN or
    /// infinity, so a record holding them serializes to `null` and will not
    /// parse back.
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        match serde_json::from_str::<Vec2Record>(json) {
            Ok(record) => Ok(record),
            Err(err) => {
                debug!("rejected vector record {:?}: {}", json, err);
                Err(Box::new(vec_err!(&format!(
                    "invalid vector record {}: {}",
                    json, err
                ))))
            }
        }
    }

    pub fn to_json_string(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Coordinates for Vec2Record {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod test_record {
    use super::*;
    use crate::vec_error::VecError;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_record_json_shape() {
        let json = Vec2Record::new(1.0, 2.5).to_json_string().unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.5}"#);
        let record = Vec2Record::from_json_str(r#"{"y": -3, "x": 0.25}"#).unwrap();
        assert_eq!(record, Vec2Record::new(0.25, -3.0));
    }

    #[test]
    fn test_reject_malformed() {
        init_log();
        for json in [
            r#"{"x": 1.0}"#,
            r#"{"x": "1", "y": 2}"#,
            r#"{"x": null, "y": 2}"#,
            "42",
            "not json",
        ] {
            let err = Vec2Record::from_json_str(json).unwrap_err();
            let err = err.downcast_ref::<VecError>().unwrap();
            assert!(err.message().contains("invalid vector record"));
        }
    }

    #[test]
    fn test_non_finite_does_not_round_trip() {
        let json = Vec2Record::new(f64::NAN, 1.0).to_json_string().unwrap();
        assert_eq!(json, r#"{"x":null,"y":1.0}"#);
        assert!(Vec2Record::from_json_str(&json).is_err());
    }
}
