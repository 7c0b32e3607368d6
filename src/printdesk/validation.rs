//! Input validation for printer forms.
//!
//! The store accepts whatever [`PrinterFields`] it is handed. Everything a user
//! types goes through this module first:
//! - `brand` and `model` must not be blank
//! - `building` is one letter followed by one digit (`H1`), stored uppercased
//! - `floor` is exactly three digits (`201`)
//! - `paper` is a non-negative whole number
//! - `date` is `YYYY-MM-DD`

use crate::error::{PrintdeskError, Result};
use crate::model::{PrinterFields, PrinterStatus, PrinterType};
use chrono::NaiveDate;

/// Validates and normalizes a building code.
///
/// # Examples
/// ```
/// use printdesk::validation::validate_building;
///
/// assert_eq!(validate_building("h1").unwrap(), "H1");
/// assert!(validate_building("H12").is_err());
/// assert!(validate_building("1H").is_err());
/// ```
pub fn validate_building(input: &str) -> Result<String> {
    let building = input.trim().to_uppercase();
    let mut chars = building.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None)
            if letter.is_ascii_alphabetic() && digit.is_ascii_digit() =>
        {
            Ok(building)
        }
        _ => Err(PrintdeskError::Validation(format!(
            "building '{}' should be a letter followed by a digit (e.g. H1)",
            input.trim()
        ))),
    }
}

/// Validates a floor code: exactly three ASCII digits.
pub fn validate_floor(input: &str) -> Result<String> {
    let floor = input.trim();
    if floor.len() == 3 && floor.chars().all(|c| c.is_ascii_digit()) {
        Ok(floor.to_string())
    } else {
        Err(PrintdeskError::Validation(format!(
            "floor '{}' should be a 3-digit number (e.g. 201)",
            floor
        )))
    }
}

pub fn validate_required(field: &str, input: &str) -> Result<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(PrintdeskError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(value.to_string())
}

pub fn validate_paper_quantity(input: &str) -> Result<u32> {
    input.trim().parse::<u32>().map_err(|_| {
        PrintdeskError::Validation(format!(
            "paper quantity '{}' should be a whole number of at least 0",
            input.trim()
        ))
    })
}

pub fn validate_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        PrintdeskError::Validation(format!(
            "date '{}' should be formatted as YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Raw user input for creating or editing a printer.
///
/// Every field is optional: unset fields keep the value of the base record
/// passed to [`PrinterForm::into_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterForm {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub paper_quantity: Option<String>,
    pub date_added: Option<String>,
    pub printer_type: Option<String>,
    pub note: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub status: Option<String>,
}

impl PrinterForm {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges the form over `base` and validates the result.
    ///
    /// Required fields are checked on the merged value, so a create form built
    /// on [`PrinterFields::default`] fails unless brand, model, building and
    /// floor were supplied.
    pub fn into_fields(self, base: PrinterFields) -> Result<PrinterFields> {
        let brand = validate_required("brand", self.brand.as_deref().unwrap_or(&base.brand))?;
        let model = validate_required("model", self.model.as_deref().unwrap_or(&base.model))?;
        let building = validate_building(self.building.as_deref().unwrap_or(&base.building))?;
        let floor = validate_floor(self.floor.as_deref().unwrap_or(&base.floor))?;

        let paper_quantity = match self.paper_quantity.as_deref() {
            Some(raw) => validate_paper_quantity(raw)?,
            None => base.paper_quantity,
        };
        let date_added = match self.date_added.as_deref() {
            Some(raw) => validate_date(raw)?,
            None => base.date_added,
        };
        let printer_type = match self.printer_type.as_deref() {
            Some(raw) => raw.parse::<PrinterType>().map_err(PrintdeskError::Validation)?,
            None => base.printer_type,
        };
        let status = match self.status.as_deref() {
            Some(raw) => raw
                .parse::<PrinterStatus>()
                .map_err(PrintdeskError::Validation)?,
            None => base.status,
        };
        let note = self.note.unwrap_or(base.note);

        Ok(PrinterFields {
            brand,
            model,
            paper_quantity,
            date_added,
            printer_type,
            note,
            building,
            floor,
            status,
        })
    }
}
