use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodRecord;

/// Load foods from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodRecord> = serde_json::from_str(&content)?;
    let read = foods.len();

    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FoodRecord> = HashMap::new();
    for food in foods {
        let key = food.key();
        if seen.insert(key.clone(), food).is_none() {
            order.push(key);
        }
    }

    if seen.len() < read {
        tracing::debug!(
            path = %path.display(),
            duplicates = read - seen.len(),
            "dropped duplicate food names"
        );
    }
    tracing::info!(path = %path.display(), foods = seen.len(), "loaded foods");

    Ok(order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .collect())
}

/// Save foods to a JSON file.
///
/// Deduplicates by lowercase name before saving.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[FoodRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut seen: HashMap<String, &FoodRecord> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }

    let mut deduped: Vec<&FoodRecord> = seen.into_values().collect();
    deduped.sort_by_key(|f| f.key());

    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), foods = deduped.len(), "saved foods");
    Ok(())
}
