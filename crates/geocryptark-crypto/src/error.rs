use thiserror::Error;

pub type GeoCryptResult<T> = Result<T, GeoCryptError>;

#[derive(Debug, Error)]
pub enum GeoCryptError {
    /// A single coordinate pair handed to the geo-hash generator is out of range.
    #[error(
        "invalid coordinates: latitude must be between -90 and 90, longitude must be between -180 and 180 (got lat={lat}, lng={lng})"
    )]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// A coordinate list handed to multi-key encryption contains an out-of-range pair.
    #[error(
        "invalid coordinates in list: latitude must be between -90 and 90, longitude must be between -180 and 180 (got lat={lat}, lng={lng})"
    )]
    InvalidCoordinateList { lat: f64, lng: f64 },

    /// Digest, KDF, cipher or random source failure.
    #[error("crypto provider error: {0}")]
    Provider(String),

    #[error("base64 decode: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The blocking key-derivation task did not complete.
    #[error("task error: {0}")]
    Task(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_distinguishable_by_message() {
        let single = GeoCryptError::InvalidCoordinates { lat: 91.0, lng: 0.0 }.to_string();
        let list = GeoCryptError::InvalidCoordinateList { lat: 91.0, lng: 0.0 }.to_string();

        assert!(single.starts_with("invalid coordinates:"));
        assert!(list.starts_with("invalid coordinates in list:"));
        assert!(list.contains("lat=91"));
        assert!(list.contains("lng=0"));
    }
}
