use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runner::ds::symbol::SymbolData;

/// A property key. Statically-spelled and computed keys both arrive here,
/// so dot access and bracket access resolve identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Int(u32),
    Sym(SymbolData),
}
impl PropertyKey {
    pub fn str(name: &str) -> Self {
        PropertyKey::Str(name.to_string())
    }
}
impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => write!(f, "{}", s),
            PropertyKey::Int(i) => write!(f, "{}", i),
            PropertyKey::Sym(s) => write!(f, "{}", s),
        }
    }
}
