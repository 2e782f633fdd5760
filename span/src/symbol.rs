use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, fmt};

/// An interned identifier.
///
/// Two `Symbol`s compare equal iff they intern the same text; comparison
/// never touches the underlying bytes. The parser is single-threaded (see
/// the concurrency notes in the design docs), so the interner below is a
/// plain `thread_local!`, not a concurrent structure guarded by a mutex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

thread_local! {
    static INTERNER: RefCell<Interner> = RefCell::new(Interner::new());
}

struct Interner {
    names: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Self { names: FxHashMap::default(), strings: Vec::new() }
    }

    fn intern(&mut self, string: &str) -> u32 {
        if let Some(&id) = self.names.get(string) {
            return id;
        }
        // Leaked once per distinct identifier ever seen; identifiers in a
        // single compilation unit are bounded, so this never grows large
        // enough to matter.
        let string: &'static str = Box::leak(string.to_string().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(string);
        self.names.insert(string, id);
        id
    }

    fn get(&self, id: u32) -> &'static str {
        self.strings[id as usize]
    }
}

impl Symbol {
    /// Interns `string`, returning a handle that compares in O(1).
    pub fn intern(string: &str) -> Self {
        INTERNER.with(|i| Symbol(i.borrow_mut().intern(string)))
    }

    /// Returns the original text of this symbol.
    pub fn as_str(&self) -> &'static str {
        INTERNER.with(|i| i.borrow().get(self.0))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::intern(&s)
    }
}
