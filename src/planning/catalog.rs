//! Launch sites, target orbits and reference satellites.
//!
//! A catalog can be built in, or read from a whitespace-separated table:
//!
//! ```text
//! # kind       key       name                  ...
//! site         kennedy   Kennedy_Space_Center  28.5721  -80.648  USA
//! target       leo       Low_Earth_Orbit       400      28.5
//! satellite    ISS       408                   51.6     Active
//! ```
//!
//! Underscores in names are read as spaces. Blank lines and lines starting
//! with `#` are skipped.

use std::fs;
use std::path::Path;
use std::str::SplitAsciiWhitespace;

use serde::Serialize;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchSite {
    pub key: String,
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetOrbit {
    pub key: String,
    pub name: String,
    pub altitude_km: f64,
    pub inclination_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Satellite {
    pub name: String,
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sites: Vec<LaunchSite>,
    targets: Vec<TargetOrbit>,
    satellites: Vec<Satellite>,
}

impl LaunchSite {
    pub fn new(key: &str, name: &str, latitude_deg: f64, longitude_deg: f64, country: &str) -> Self {
        Self {
            key: key.to_owned(),
            name: name.to_owned(),
            latitude_deg,
            longitude_deg,
            country: country.to_owned(),
        }
    }
}

impl TargetOrbit {
    pub fn new(key: &str, name: &str, altitude_km: f64, inclination_deg: f64) -> Self {
        Self {
            key: key.to_owned(),
            name: name.to_owned(),
            altitude_km,
            inclination_deg,
        }
    }
}

impl Satellite {
    pub fn new(name: &str, altitude_km: f64, inclination_deg: f64, status: &str) -> Self {
        Self {
            name: name.to_owned(),
            altitude_km,
            inclination_deg,
            status: status.to_owned(),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sites, targets, and satellites the planning panels ship with.
    pub fn builtin() -> Self {
        Self {
            sites: vec![
                LaunchSite::new("kennedy", "Kennedy Space Center", 28.5721, -80.648, "USA"),
                LaunchSite::new("baikonur", "Baikonur Cosmodrome", 45.965, 63.305, "Kazakhstan"),
                LaunchSite::new("kourou", "Guiana Space Centre", 5.236, -52.768, "French Guiana"),
                LaunchSite::new("vandenberg", "Vandenberg SFB", 34.632, -120.611, "USA"),
            ],
            targets: vec![
                TargetOrbit::new("leo", "Low Earth Orbit", 400.0, 28.5),
                TargetOrbit::new("meo", "Medium Earth Orbit", 20_200.0, 55.0),
                TargetOrbit::new("geo", "Geostationary Orbit", 35_786.0, 0.0),
                TargetOrbit::new("polar", "Polar Orbit", 800.0, 90.0),
            ],
            satellites: vec![
                Satellite::new("ISS", 408.0, 51.6, "Active"),
                Satellite::new("Hubble", 547.0, 28.5, "Active"),
                Satellite::new("GPS Satellite", 20_200.0, 55.0, "Active"),
                Satellite::new("Geostationary", 35_786.0, 0.0, "Active"),
            ],
        }
    }

    pub fn add_site(&mut self, site: LaunchSite) {
        self.sites.push(site);
    }

    pub fn add_target(&mut self, target: TargetOrbit) {
        self.targets.push(target);
    }

    pub fn add_satellite(&mut self, satellite: Satellite) {
        self.satellites.push(satellite);
    }

    pub fn sites(&self) -> &[LaunchSite] {
        &self.sites
    }

    pub fn targets(&self) -> &[TargetOrbit] {
        &self.targets
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Case-insensitive lookup by key
    pub fn site(&self, key: &str) -> Result<&LaunchSite, CatalogError> {
        self.sites
            .iter()
            .find(|site| site.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| CatalogError::UnknownKey {
                kind: "launch site",
                key: key.to_owned(),
            })
    }

    /// Case-insensitive lookup by key
    pub fn target(&self, key: &str) -> Result<&TargetOrbit, CatalogError> {
        self.targets
            .iter()
            .find(|target| target.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| CatalogError::UnknownKey {
                kind: "target orbit",
                key: key.to_owned(),
            })
    }
}

pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;
    tracing::info!(
        path = %path.display(),
        sites = catalog.sites.len(),
        targets = catalog.targets.len(),
        satellites = catalog.satellites.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

pub fn parse_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = Fields::new(line, idx + 1);
        match fields.string("kind")? {
            "site" => catalog.add_site(LaunchSite {
                key: fields.string("key")?.to_owned(),
                name: fields.name("name")?,
                latitude_deg: fields.number("latitude")?,
                longitude_deg: fields.number("longitude")?,
                country: fields.name("country")?,
            }),
            "target" => catalog.add_target(TargetOrbit {
                key: fields.string("key")?.to_owned(),
                name: fields.name("name")?,
                altitude_km: fields.number("altitude")?,
                inclination_deg: fields.number("inclination")?,
            }),
            "satellite" => catalog.add_satellite(Satellite {
                name: fields.name("name")?,
                altitude_km: fields.number("altitude")?,
                inclination_deg: fields.number("inclination")?,
                status: fields.name("status")?,
            }),
            kind => {
                return Err(CatalogError::UnknownKind {
                    line: idx + 1,
                    kind: kind.to_owned(),
                })
            }
        }
    }

    Ok(catalog)
}

/// The columns of one catalog line, consumed left to right.
struct Fields<'a> {
    inner: SplitAsciiWhitespace<'a>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            line,
        }
    }

    fn string(&mut self, field: &'static str) -> Result<&'a str, CatalogError> {
        self.inner.next().ok_or(CatalogError::MissingField {
            line: self.line,
            field,
        })
    }

    fn name(&mut self, field: &'static str) -> Result<String, CatalogError> {
        self.string(field).map(|s| s.replace('_', " "))
    }

    fn number(&mut self, field: &'static str) -> Result<f64, CatalogError> {
        let value = self.string(field)?;
        value.parse::<f64>().map_err(|_| CatalogError::BadNumber {
            line: self.line,
            value: value.to_owned(),
        })
    }
}
