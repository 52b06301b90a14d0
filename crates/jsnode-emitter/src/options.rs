//! Configuration for JavaScript emission.

use jsnode_common::limits::MAX_EMIT_RECURSION_DEPTH;
use serde::{Deserialize, Serialize};

/// Options controlling literal escaping and recursion.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmitterOptions {
    /// Escape `$` inside string literals as `\$`.
    ///
    /// Template dialects that interpolate `${...}` inside double-quoted
    /// strings need this; plain JavaScript reads `\$` as `$` either way.
    pub escape_dollar: bool,
    /// Escape `\n`, `\r`, U+2028 and U+2029 inside string literals.
    ///
    /// Off by default: those characters are passed through verbatim.
    pub escape_line_terminators: bool,
    /// Maximum nesting of `compile`/`subcompile` calls.
    pub max_depth: u32,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            escape_dollar: true,
            escape_line_terminators: false,
            max_depth: MAX_EMIT_RECURSION_DEPTH,
        }
    }
}

impl EmitterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Set whether `$` is escaped.
    pub fn escape_dollar(mut self, value: bool) -> Self {
        self.escape_dollar = value;
        self
    }

    /// Set whether line terminators are escaped.
    pub fn escape_line_terminators(mut self, value: bool) -> Self {
        self.escape_line_terminators = value;
        self
    }

    /// Set the recursion limit.
    pub fn max_depth(mut self, value: u32) -> Self {
        self.max_depth = value;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
