/// A monetary offer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Value {
    /// The amount offered
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Whether `amount` includes value-added tax
    pub value_added_tax_included: bool,
}
