//! Open-data API models
//!
//! This module defines the response envelope and the per-dataset record
//! shapes. These models are separate from [`Monument`] and only handle the
//! upstream JSON; each record type knows how to normalize itself.
//!
//! Fields the datasets always carry (`appellation_courante`, `denomination`,
//! the Lille and Roubaix ids) are not optional: a record without them fails
//! decoding, which fails the whole fetch.

use crate::domain::Monument;
use serde::Deserialize;
use std::fmt;

/// `GET .../records` response body
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsEnvelope<T> {
    /// Number of records matching upstream, regardless of paging
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Records of this page
    pub results: Vec<T>,
}

/// An identifier delivered either as a JSON string or a JSON number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(text) => write!(f, "{text}"),
            RawId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A numeric field delivered either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Numeric value, if there is one
    ///
    /// Text is trimmed and parsed; empty or non-numeric text has no value.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(number) => *number,
            RawNumber::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    /// Numeric value, treating falsy upstream values as missing
    ///
    /// A numeric zero and an empty string count as missing. Text that reads
    /// as zero (`"0"`) is still a value.
    pub fn truthy_value(&self) -> Option<f64> {
        match self {
            RawNumber::Number(number) if *number == 0.0 => None,
            _ => self.value(),
        }
    }
}

/// Coarse category: the text up to the first space
///
/// A leading space yields an empty category, as does empty text.
pub fn first_token(text: &str) -> String {
    text.split(' ').next().unwrap_or_default().to_string()
}

/// Year from a numeric value, dropping any fractional part
pub fn to_year(value: f64) -> Option<i32> {
    let year = value.trunc();
    (year >= f64::from(i32::MIN) && year <= f64::from(i32::MAX)).then_some(year as i32)
}

/// Splits a `"lat, long"` string into its two numbers
///
/// Each half is parsed on its own; a missing or unparsable half is absent.
pub fn split_coordinates(text: &str) -> (Option<f64>, Option<f64>) {
    let mut parts = text.split(", ");
    let parse = |part: Option<&str>| part.and_then(|p| RawNumber::Text(p.to_string()).value());
    let lat = parse(parts.next());
    let long = parse(parts.next());
    (lat, long)
}

/// `geo_point_2d` value
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPoint {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// File attachment metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: Option<RawId>,
}

/// Record of the Armentières dataset
#[derive(Debug, Clone, Deserialize)]
pub struct ArmentieresRecord {
    #[serde(default)]
    pub coordonnees_geographiques: Option<GeoPoint>,
    pub appellation_courante: String,
    #[serde(default)]
    pub datation: Option<RawNumber>,
    #[serde(default)]
    pub commune: Option<String>,
    #[serde(default)]
    pub photo: Option<Photo>,
}

impl ArmentieresRecord {
    /// Convert to a normalized monument
    ///
    /// The dataset has no record id of its own; the photo attachment id
    /// stands in for it and is empty when the record has no photo.
    pub fn to_domain(&self) -> Monument {
        let id = self
            .photo
            .as_ref()
            .and_then(|photo| photo.id.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default();

        let (lat, long) = match &self.coordonnees_geographiques {
            Some(point) => (point.lat, point.lon),
            None => (None, None),
        };

        Monument::new(id, first_token(&self.appellation_courante))
            .with_coordinates(lat, long)
            .with_date(self.datation.as_ref().and_then(RawNumber::value).and_then(to_year))
            .with_ville(self.commune.clone())
    }
}

/// Record of the Lille dataset
#[derive(Debug, Clone, Deserialize)]
pub struct LilleRecord {
    pub id_merimee: RawId,
    #[serde(default)]
    pub coord_geo: Option<String>,
    pub denomination: String,
    #[serde(default)]
    pub datation_bati_lmcu: Option<RawNumber>,
    #[serde(default)]
    pub commune: Option<String>,
}

impl LilleRecord {
    /// Convert to a normalized monument
    pub fn to_domain(&self) -> Monument {
        let (lat, long) = self
            .coord_geo
            .as_deref()
            .map(split_coordinates)
            .unwrap_or((None, None));

        Monument::new(self.id_merimee.to_string(), first_token(&self.denomination))
            .with_coordinates(lat, long)
            .with_date(
                self.datation_bati_lmcu
                    .as_ref()
                    .and_then(RawNumber::value)
                    .and_then(to_year),
            )
            .with_ville(self.commune.clone())
    }
}

/// Record of the Roubaix dataset
#[derive(Debug, Clone, Deserialize)]
pub struct RoubaixRecord {
    pub monum_his_com_id: RawId,
    #[serde(default)]
    pub lat: Option<RawNumber>,
    #[serde(default)]
    pub long: Option<RawNumber>,
    pub appellation_courante: String,
    #[serde(default)]
    pub epoque: Option<RawNumber>,
    #[serde(default)]
    pub commune: Option<String>,
}

impl RoubaixRecord {
    /// Convert to a normalized monument
    ///
    /// Coordinates and epoch use falsy-as-missing coercion: a latitude of
    /// exactly `0` is reported as absent.
    pub fn to_domain(&self) -> Monument {
        Monument::new(
            self.monum_his_com_id.to_string(),
            first_token(&self.appellation_courante),
        )
        .with_coordinates(
            self.lat.as_ref().and_then(RawNumber::truthy_value),
            self.long.as_ref().and_then(RawNumber::truthy_value),
        )
        .with_date(
            self.epoque
                .as_ref()
                .and_then(RawNumber::truthy_value)
                .and_then(to_year),
        )
        .with_ville(self.commune.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("Eglise Saint-Maurice"), "Eglise");
        assert_eq!(first_token("Beffroi"), "Beffroi");
        assert_eq!(first_token(""), "");
        assert_eq!(first_token(" Hôtel"), "");
        assert_eq!(first_token("Maison\tde ville"), "Maison\tde");
    }

    #[test]
    fn test_raw_number_value() {
        assert_eq!(RawNumber::Number(1850.0).value(), Some(1850.0));
        assert_eq!(RawNumber::Text(" 1850 ".to_string()).value(), Some(1850.0));
        assert_eq!(RawNumber::Text("".to_string()).value(), None);
        assert_eq!(RawNumber::Text("XIXe siècle".to_string()).value(), None);
        assert_eq!(RawNumber::Number(0.0).value(), Some(0.0));
    }

    #[test]
    fn test_raw_number_truthy_value() {
        assert_eq!(RawNumber::Number(0.0).truthy_value(), None);
        assert_eq!(RawNumber::Text("".to_string()).truthy_value(), None);
        assert_eq!(RawNumber::Text("0".to_string()).truthy_value(), Some(0.0));
        assert_eq!(RawNumber::Number(50.69).truthy_value(), Some(50.69));
    }

    #[test]
    fn test_split_coordinates() {
        assert_eq!(split_coordinates("50.5, 3.1"), (Some(50.5), Some(3.1)));
        assert_eq!(split_coordinates("50.5"), (Some(50.5), None));
        assert_eq!(split_coordinates("50.5,3.1"), (None, None));
        assert_eq!(split_coordinates(""), (None, None));
    }

    #[test]
    fn test_raw_id_display() {
        let number: RawId = serde_json::from_value(json!(1234)).unwrap();
        let text: RawId = serde_json::from_value(json!("PA00107422")).unwrap();
        assert_eq!(number.to_string(), "1234");
        assert_eq!(text.to_string(), "PA00107422");
    }

    #[test]
    fn test_armentieres_to_domain() {
        let record: ArmentieresRecord = serde_json::from_value(json!({
            "coordonnees_geographiques": {"lon": 2.88, "lat": 50.68},
            "appellation_courante": "Hôtel de ville et beffroi",
            "datation": "1934",
            "commune": "Armentières",
            "photo": {"id": "f3a9", "filename": "beffroi.jpg"}
        }))
        .unwrap();

        let monument = record.to_domain();
        assert_eq!(monument.id, "f3a9");
        assert_eq!(monument.lat, Some(50.68));
        assert_eq!(monument.long, Some(2.88));
        assert_eq!(monument.kind, "Hôtel");
        assert_eq!(monument.date, Some(1934));
        assert_eq!(monument.ville.as_deref(), Some("Armentières"));
    }

    #[test]
    fn test_armentieres_missing_optional_fields() {
        let record: ArmentieresRecord = serde_json::from_value(json!({
            "appellation_courante": "Eglise",
            "datation": null,
            "coordonnees_geographiques": null
        }))
        .unwrap();

        let monument = record.to_domain();
        assert_eq!(monument.id, "");
        assert_eq!(monument.lat, None);
        assert_eq!(monument.long, None);
        assert_eq!(monument.date, None);
        assert_eq!(monument.ville, None);
    }

    #[test]
    fn test_armentieres_requires_appellation() {
        let result: Result<ArmentieresRecord, _> =
            serde_json::from_value(json!({"commune": "Armentières"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_lille_to_domain() {
        let record: LilleRecord = serde_json::from_value(json!({
            "id_merimee": "PA00107485",
            "coord_geo": "50.5, 3.1",
            "denomination": "Maison à pignon",
            "datation_bati_lmcu": 1856,
            "commune": "LILLE"
        }))
        .unwrap();

        let monument = record.to_domain();
        assert_eq!(monument.id, "PA00107485");
        assert_eq!(monument.lat, Some(50.5));
        assert_eq!(monument.long, Some(3.1));
        assert_eq!(monument.kind, "Maison");
        assert_eq!(monument.date, Some(1856));
        assert_eq!(monument.ville.as_deref(), Some("LILLE"));
    }

    #[test]
    fn test_lille_requires_denomination() {
        let result: Result<LilleRecord, _> =
            serde_json::from_value(json!({"id_merimee": "PA1", "denomination": null}));
        assert!(result.is_err());
    }

    #[test]
    fn test_roubaix_zero_is_missing() {
        let record: RoubaixRecord = serde_json::from_value(json!({
            "monum_his_com_id": 17,
            "lat": 0,
            "long": 3.17,
            "appellation_courante": "Usine Motte-Bossut",
            "epoque": 0,
            "commune": "Roubaix"
        }))
        .unwrap();

        let monument = record.to_domain();
        assert_eq!(monument.id, "17");
        assert_eq!(monument.lat, None);
        assert_eq!(monument.long, Some(3.17));
        assert_eq!(monument.kind, "Usine");
        assert_eq!(monument.date, None);
    }

    #[test]
    fn test_roubaix_text_values_are_coerced() {
        let record: RoubaixRecord = serde_json::from_value(json!({
            "monum_his_com_id": "42",
            "lat": "50.69",
            "long": "3.18",
            "appellation_courante": "Villa Cavrois",
            "epoque": "1932"
        }))
        .unwrap();

        let monument = record.to_domain();
        assert_eq!(monument.lat, Some(50.69));
        assert_eq!(monument.long, Some(3.18));
        assert_eq!(monument.date, Some(1932));
        assert_eq!(monument.ville, None);
    }

    #[test]
    fn test_envelope_decoding() {
        let envelope: RecordsEnvelope<LilleRecord> = serde_json::from_value(json!({
            "total_count": 1,
            "results": [{"id_merimee": 1, "denomination": "Porte de Paris"}]
        }))
        .unwrap();

        assert_eq!(envelope.total_count, Some(1));
        assert_eq!(envelope.results.len(), 1);
        assert_eq!(envelope.results[0].to_domain().kind, "Porte");
    }
}
