use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterType {
    #[default]
    Laser,
    Inkjet,
    Thermal,
    Multifunction,
}

impl PrinterType {
    pub const ALL: [PrinterType; 4] = [
        PrinterType::Laser,
        PrinterType::Inkjet,
        PrinterType::Thermal,
        PrinterType::Multifunction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterType::Laser => "laser",
            PrinterType::Inkjet => "inkjet",
            PrinterType::Thermal => "thermal",
            PrinterType::Multifunction => "multifunction",
        }
    }
}

impl fmt::Display for PrinterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrinterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown printer type '{}' (expected laser, inkjet, thermal or multifunction)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl PrinterStatus {
    pub const ALL: [PrinterStatus; 3] = [
        PrinterStatus::Active,
        PrinterStatus::Maintenance,
        PrinterStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterStatus::Active => "active",
            PrinterStatus::Maintenance => "maintenance",
            PrinterStatus::Inactive => "inactive",
        }
    }

    /// Human-readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            PrinterStatus::Active => "Active",
            PrinterStatus::Maintenance => "Under maintenance",
            PrinterStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrinterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown status '{}' (expected active, maintenance or inactive)",
                    s
                )
            })
    }
}

/// Every printer attribute except its identity.
///
/// This is what create and update operate on: the id is assigned once by the
/// store and never replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterFields {
    pub brand: String,
    pub model: String,
    pub paper_quantity: u32,
    pub date_added: NaiveDate,
    #[serde(rename = "type")]
    pub printer_type: PrinterType,
    #[serde(default)]
    pub note: String,
    pub building: String,
    pub floor: String,
    pub status: PrinterStatus,
}

impl Default for PrinterFields {
    fn default() -> Self {
        Self {
            brand: String::new(),
            model: String::new(),
            paper_quantity: 0,
            date_added: Local::now().date_naive(),
            printer_type: PrinterType::Laser,
            note: String::new(),
            building: String::new(),
            floor: String::new(),
            status: PrinterStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: PrinterFields,
}

impl PrinterRecord {
    pub fn new(id: impl Into<String>, fields: PrinterFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Sort key for the brand column: brand and model joined by a space.
    pub fn brand_key(&self) -> String {
        format!("{} {}", self.fields.brand, self.fields.model)
    }

    /// Sort key for the position column, e.g. `H1-201`.
    pub fn position_key(&self) -> String {
        format!("{}-{}", self.fields.building, self.fields.floor)
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// The inventory a fresh store starts with.
pub fn seed_printers() -> Vec<PrinterRecord> {
    let added = NaiveDate::from_ymd_opt(2024, 11, 18).unwrap_or_default();
    vec![
        PrinterRecord::new(
            "1",
            PrinterFields {
                brand: "HP".to_string(),
                model: "Xịn nhất".to_string(),
                paper_quantity: 500,
                date_added: added,
                printer_type: PrinterType::Laser,
                note: String::new(),
                building: "H1".to_string(),
                floor: "201".to_string(),
                status: PrinterStatus::Active,
            },
        ),
        PrinterRecord::new(
            "2",
            PrinterFields {
                brand: "Đéll".to_string(),
                model: "Cùi bắp".to_string(),
                paper_quantity: 200,
                date_added: added,
                printer_type: PrinterType::Inkjet,
                note: String::new(),
                building: "H2".to_string(),
                floor: "301".to_string(),
                status: PrinterStatus::Maintenance,
            },
        ),
    ]
}
