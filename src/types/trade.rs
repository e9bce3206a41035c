use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub type TradeId = String;

/// `null` or absent becomes 0; fractional values are truncated toward zero.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(|v| v.trunc() as i32).unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One journal entry. `profit` and `profit_percentage` are whatever the client sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub id: Option<TradeId>,
    pub user_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub action: Option<String>,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(rename = "type")]
    pub trade_type: Option<String>,
    pub option_type: Option<String>,
    pub strategy: Option<String>,
    pub notes: Option<String>,
    pub exit_date: Option<NaiveDate>,
    pub exit_price: Option<f64>,
    pub profit: Option<f64>,
    pub profit_percentage: Option<f64>,
}
