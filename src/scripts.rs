//! Supported scripts and their engine scheme tokens.
//!
//! The table is built once at startup and shared read-only between
//! request handlers. Lookups are case-insensitive and never fail: an
//! unknown name resolves to `None`.

use std::collections::HashMap;
use std::fmt;

use vidyut_lipi::Scheme;

/// A script (or romanization scheme) the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptId {
    Devanagari,
    Iast,
    HarvardKyoto,
    Baraha,
    Itrans,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Gujarati,
    Slp1,
    Velthuis,
    Wx,
}

impl ScriptId {
    /// Every supported script, in the order they are advertised.
    pub const ALL: [ScriptId; 13] = [
        ScriptId::Devanagari,
        ScriptId::Iast,
        ScriptId::HarvardKyoto,
        ScriptId::Baraha,
        ScriptId::Itrans,
        ScriptId::Tamil,
        ScriptId::Telugu,
        ScriptId::Kannada,
        ScriptId::Malayalam,
        ScriptId::Gujarati,
        ScriptId::Slp1,
        ScriptId::Velthuis,
        ScriptId::Wx,
    ];

    /// Canonical lowercase name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            ScriptId::Devanagari => "devanagari",
            ScriptId::Iast => "iast",
            ScriptId::HarvardKyoto => "harvard-kyoto",
            ScriptId::Baraha => "baraha",
            ScriptId::Itrans => "itrans",
            ScriptId::Tamil => "tamil",
            ScriptId::Telugu => "telugu",
            ScriptId::Kannada => "kannada",
            ScriptId::Malayalam => "malayalam",
            ScriptId::Gujarati => "gujarati",
            ScriptId::Slp1 => "slp1",
            ScriptId::Velthuis => "velthuis",
            ScriptId::Wx => "wx",
        }
    }

    /// Human-facing label, written in the script itself where it has one.
    pub fn label(self) -> &'static str {
        match self {
            ScriptId::Devanagari => "देवनागरी",
            ScriptId::Iast => "IAST",
            ScriptId::HarvardKyoto => "Harvard-Kyoto",
            ScriptId::Baraha => "Baraha",
            ScriptId::Itrans => "ITRANS",
            ScriptId::Tamil => "தமிழ்",
            ScriptId::Telugu => "తెలుగు",
            ScriptId::Kannada => "ಕನ್ನಡ",
            ScriptId::Malayalam => "മലയാളം",
            ScriptId::Gujarati => "ગુજરાતી",
            ScriptId::Slp1 => "SLP1",
            ScriptId::Velthuis => "Velthuis",
            ScriptId::Wx => "WX",
        }
    }

    /// The engine's token for this script.
    ///
    /// Baraha maps to the southern variant.
    pub fn scheme(self) -> Scheme {
        match self {
            ScriptId::Devanagari => Scheme::Devanagari,
            ScriptId::Iast => Scheme::Iast,
            ScriptId::HarvardKyoto => Scheme::HarvardKyoto,
            ScriptId::Baraha => Scheme::BarahaSouth,
            ScriptId::Itrans => Scheme::Itrans,
            ScriptId::Tamil => Scheme::Tamil,
            ScriptId::Telugu => Scheme::Telugu,
            ScriptId::Kannada => Scheme::Kannada,
            ScriptId::Malayalam => Scheme::Malayalam,
            ScriptId::Gujarati => Scheme::Gujarati,
            ScriptId::Slp1 => Scheme::Slp1,
            ScriptId::Velthuis => Scheme::Velthuis,
            ScriptId::Wx => Scheme::Wx,
        }
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable name → script table.
#[derive(Debug, Clone)]
pub struct ScriptTable {
    ordered: Vec<ScriptId>,
    by_name: HashMap<&'static str, ScriptId>,
}

impl ScriptTable {
    /// The full set of scripts the gateway supports.
    pub fn standard() -> Self {
        Self::from_scripts(&ScriptId::ALL)
    }

    /// Build a table over a subset of scripts. Duplicates are ignored.
    pub fn from_scripts(scripts: &[ScriptId]) -> Self {
        let mut ordered = Vec::with_capacity(scripts.len());
        let mut by_name = HashMap::with_capacity(scripts.len());
        for &script in scripts {
            if by_name.insert(script.name(), script).is_none() {
                ordered.push(script);
            }
        }
        Self { ordered, by_name }
    }

    /// Case-insensitive lookup. Whitespace is significant.
    pub fn resolve(&self, name: &str) -> Option<ScriptId> {
        self.by_name.get(name.to_lowercase().as_str()).copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.ordered.iter().map(|s| s.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ScriptId> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for ScriptTable {
    fn default() -> Self {
        Self::standard()
    }
}
