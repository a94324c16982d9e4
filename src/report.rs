use crate::types::{FractionOutput, ShapleyOutput};
use num_traits::ToPrimitive;
use std::{
    collections::BTreeMap,
    fmt::{Debug, Display, Formatter},
};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// One player's Shapley value and its share of the positive total
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
#[derive(Debug, Clone, PartialEq)]
pub struct ShapleyValue {
    pub player: String,
    pub value: f64,
    pub proportion: f64,
}

impl Display for ShapleyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player: {}, value: {}, proportion: {}",
            self.player, self.value, self.proportion
        )
    }
}

/// Build result rows from floating point Shapley values
pub fn summarize<P: Debug>(output: &ShapleyOutput<P>) -> Vec<ShapleyValue> {
    rows(output.iter().map(|(p, &v)| (format!("{p:?}"), v)))
}

/// Build result rows from exact Shapley values
pub fn summarize_fractions<P: Debug>(output: &FractionOutput<P>) -> Vec<ShapleyValue> {
    rows(
        output
            .iter()
            .map(|(p, v)| (format!("{p:?}"), v.to_f64().unwrap_or(f64::NAN))),
    )
}

fn rows(values: impl Iterator<Item = (String, f64)>) -> Vec<ShapleyValue> {
    let values: Vec<(String, f64)> = values.collect();
    let total: f64 = values.iter().map(|(_, v)| v.max(0.0)).sum();

    values
        .into_iter()
        .map(|(player, value)| {
            let proportion = if total > 0.0 {
                value.max(0.0) / total
            } else {
                0.0
            };
            ShapleyValue {
                player,
                value,
                proportion,
            }
        })
        .collect()
}

/// Render a result mapping on one line, e.g. `{1: 1/3, 2: 1/2, 3: 7/6}`
pub fn format_mapping<P: Debug, V: Display>(mapping: &BTreeMap<P, V>) -> String {
    let entries: Vec<String> = mapping
        .iter()
        .map(|(player, value)| format!("{player:?}: {value}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
