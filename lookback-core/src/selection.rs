//! Display-selection resolution: which series are visible on first render.

/// The set of series names currently visible, order-stable and de-duplicated.
///
/// Initialized per request from the default set and the user's selection;
/// mutated only by explicit toggles; never persisted across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySelection {
    names: Vec<String>,
}

impl DisplaySelection {
    /// Whether `name` is currently visible.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Toggle a series on. Returns `true` if it was newly added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Toggle a series off. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Visible names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of visible series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no series is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Resolve the initial display selection for a request.
///
/// The result is the order-stable, de-duplicated union of the (resolved)
/// selected name and the fixed default set, with the selection first. The
/// defaults are never mutated; a fresh set is returned per call. The mapping
/// is total: with a non-empty default set the selection can never come out
/// empty.
#[must_use]
pub fn resolve_display_selection(selected: &str, defaults: &[String]) -> DisplaySelection {
    let mut selection = DisplaySelection::default();
    let resolved = companion_index_name(selected);
    if !resolved.is_empty() {
        selection.insert(&resolved);
    }
    for name in defaults {
        selection.insert(name);
    }
    selection
}

/// Map a selected series identifier to the name displayed for it.
///
/// Plain index names pass through unchanged. Composite tickers of the form
/// `EXCHANGE:SYMBOL` map known exchange prefixes to the companion index the
/// UI displays for that family; unknown prefixes fall back to the bare
/// symbol. Side-effect-free and total.
#[must_use]
pub fn companion_index_name(selected: &str) -> String {
    let trimmed = selected.trim();
    let Some((prefix, symbol)) = trimmed.split_once(':') else {
        return trimmed.to_string();
    };
    let symbol = symbol.trim();
    match prefix.trim().to_ascii_uppercase().as_str() {
        "DJ" | "DJI" | "DJIA" | "DOW" => "DJIA".to_string(),
        "BSE" | "BOM" | "BOMBAY" => "SENSEX".to_string(),
        "SP" | "SPX" | "S&P" => "S&P 500".to_string(),
        _ if symbol.is_empty() => trimmed.to_string(),
        _ => symbol.to_string(),
    }
}
