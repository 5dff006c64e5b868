use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::error::SelectorError;
use crate::model::{Bag, Club};

/// # Errors
///
/// Will return `Err` if the file is not readable, is not json, or the json is
/// not a bag
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_bag_json(&json)?;
    Ok(json)
}

/// Validate the bag file format
/// format we expect is this:
/// [{ "key": "<id>", "label": "<display name>", "carry": <non-negative number> }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_bag_json(json: &Value) -> Result<(), String> {
    let Some(clubs) = json.as_array() else {
        return Err("The bag json is not in the correct format. Expected an array.".to_string());
    };
    if clubs.is_empty() {
        return Err("The bag json has no clubs.".to_string());
    }

    let expected_keys = ["key", "label", "carry"];
    let mut seen: Vec<&str> = Vec::with_capacity(clubs.len());
    for club in clubs {
        let Some(obj) = club.as_object() else {
            return Err("The bag json is not in the correct format. Expected objects.".to_string());
        };
        for key in obj.keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The bag json is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }

        let Some(key) = club["key"].as_str() else {
            return Err("The json key key is not in the correct format. Expected a string.".to_string());
        };
        check_club_key(key)?;
        if seen.contains(&key) {
            return Err(format!("The club key '{key}' appears more than once."));
        }
        seen.push(key);

        if !club["label"].is_string() {
            return Err("The json key label is not in the correct format. Expected a string.".to_string());
        }
        match club["carry"].as_f64() {
            Some(carry) if carry >= 0.0 => {}
            _ => {
                return Err(format!(
                    "The carry for '{key}' is not in the correct format. Expected a non-negative number."
                ));
            }
        }
    }
    Ok(())
}

/// Club keys end up in url paths, so keep them to plain characters.
///
/// # Errors
///
/// Will return `Err` if the key is empty or has anything other than ascii
/// letters, digits, `-` or `_`
pub fn check_club_key(key: &str) -> Result<(), String> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "The club key '{key}' may only contain letters, digits, '-' and '_'."
        ));
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the factor is NaN or infinite
pub fn check_factor(name: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{name} must be a finite number."))
    }
}

/// # Errors
///
/// Will return `Err` if the json does not deserialize into clubs
pub fn bag_from_json(json: &Value) -> Result<Bag, SelectorError> {
    validate_bag_json(json).map_err(SelectorError::Config)?;
    let clubs: Vec<Club> = serde_json::from_value(json.clone())?;
    Ok(Bag::new(clubs))
}
