use crate::constants::DATASET_LEN;
use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// One record of the dataset. Identity is the record's index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub x: f64,
    pub y: f64,
    pub base: f64,
    pub height: f64,
    pub hue: f64,
}

impl DataItem {
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("x", self.x),
            ("y", self.y),
            ("base", self.base),
            ("height", self.height),
            ("hue", self.hue),
        ]
    }
}

/// Parse the dataset file: a JSON array of records with numeric
/// `x`, `y`, `base`, `height` and `hue` fields.
pub fn parse_dataset(json: &str) -> Result<Vec<DataItem>> {
    let items: Vec<DataItem> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(DataError::Empty);
    }
    for (index, item) in items.iter().enumerate() {
        if let Some((field, _)) = item.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DataError::NonFinite { index, field });
        }
    }
    if items.len() != DATASET_LEN {
        log::warn!(
            "[data] expected {} records, got {}",
            DATASET_LEN,
            items.len()
        );
    }
    Ok(items)
}

/// Exchange `base` and `height` between two records. Position and hue stay put.
pub fn swap_base_height(items: &mut [DataItem], a: usize, b: usize) {
    if a == b || a >= items.len() || b >= items.len() {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = items.split_at_mut(hi);
    let (first, second) = (&mut head[lo], &mut tail[0]);
    std::mem::swap(&mut first.base, &mut second.base);
    std::mem::swap(&mut first.height, &mut second.height);
}
