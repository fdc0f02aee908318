//! Search criteria decoded from query parameters.

use std::collections::BTreeMap;
use std::str::FromStr;

use catalog_core::EmployeeId;

use crate::product::Product;

/// Predicate over products, compiled from criteria.
pub type ProductPredicate = Box<dyn Fn(&Product) -> bool + Send + Sync>;

/// Multimap of raw search criteria, e.g. `name=alpha`.
///
/// Supported keys are `name` (case-insensitive substring) and `owner`
/// (employee id equality), each with exactly one value. Anything else is
/// unsupported and matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria(BTreeMap<String, Vec<String>>);

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in pairs {
            map.entry(key.into()).or_default().push(value.into());
        }
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable form, used when a search matches nothing.
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|(key, values)| format!("{key}={}", values.join(",")))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Compile the criteria into a predicate.
    ///
    /// `None` means at least one key is unsupported or multi-valued, so the
    /// search cannot match anything.
    pub fn to_predicate(&self) -> Option<ProductPredicate> {
        let mut tests: Vec<ProductPredicate> = Vec::new();

        for (key, values) in &self.0 {
            if values.len() != 1 {
                return None;
            }
            let value = &values[0];

            match key.as_str() {
                "name" => {
                    let needle = value.to_lowercase();
                    tests.push(Box::new(move |p: &Product| {
                        p.name.to_lowercase().contains(&needle)
                    }));
                }
                "owner" => {
                    let owner = EmployeeId::from_str(value).ok()?;
                    tests.push(Box::new(move |p: &Product| p.owner_id == Some(owner)));
                }
                _ => return None,
            }
        }

        Some(Box::new(move |p: &Product| tests.iter().all(|t| t(p))))
    }
}
