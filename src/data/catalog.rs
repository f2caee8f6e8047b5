//! The built-in TLA+ symbol catalog
//!
//! Each [`SymbolEntry`] pairs a symbol's canonical form with the markup used
//! to typeset it, the ASCII alias(es) a user types, and a short description.
//! Entry order is meaningful: symbols are grouped by theme (logic, relations,
//! set and bag operators, quantifiers, temporal operators, Greek letters) and
//! both renderers preserve it.
//!
//! The data is kept as written. It contains one exact duplicate entry
//! (`\sim`) and a few aliases shared by several entries (`\div`, `\doteq`);
//! see [`crate::features::audit`] for reporting them.

use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Separator between alternative plain-text aliases.
pub const ALIAS_SEPARATOR: &str = " or ";

/// One symbol of the notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    canonical_form: Cow<'static, str>,
    typeset_form: Cow<'static, str>,
    plain_text_alias: Cow<'static, str>,
    description: Cow<'static, str>,
}

impl SymbolEntry {
    /// Build an entry whose canonical form is also its typeset form.
    pub fn new(
        typeset_form: impl Into<String>,
        plain_text_alias: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let typeset_form = typeset_form.into();
        Self {
            canonical_form: Cow::Owned(typeset_form.clone()),
            typeset_form: Cow::Owned(typeset_form),
            plain_text_alias: Cow::Owned(plain_text_alias.into()),
            description: Cow::Owned(description.into()),
        }
    }

    /// Set a canonical form distinct from the typeset form.
    pub fn with_canonical(mut self, canonical_form: impl Into<String>) -> Self {
        self.canonical_form = Cow::Owned(canonical_form.into());
        self
    }

    pub fn canonical_form(&self) -> &str {
        &self.canonical_form
    }

    pub fn typeset_form(&self) -> &str {
        &self.typeset_form
    }

    /// The alias field as written, alternatives joined with `" or "`.
    pub fn plain_text_alias(&self) -> &str {
        &self.plain_text_alias
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Iterate over the individual alias alternatives.
    ///
    /// ```rust
    /// use opsheet::data::SymbolEntry;
    ///
    /// let entry = SymbolEntry::new(r"\leq", r"\leq or =<", "less than or equal");
    /// assert_eq!(entry.aliases().collect::<Vec<_>>(), vec![r"\leq", "=<"]);
    /// ```
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.plain_text_alias.split(ALIAS_SEPARATOR)
    }

    /// True when any alias alternative equals `alias` exactly.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases().any(|a| a == alias)
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [{}]", self.typeset_form, self.plain_text_alias)?;
        if !self.description.is_empty() {
            write!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

/// Entry whose canonical and typeset forms coincide
const fn sym(
    typeset: &'static str,
    alias: &'static str,
    description: &'static str,
) -> SymbolEntry {
    sym_as(typeset, typeset, alias, description)
}

/// Entry typeset as a composed expression around its canonical form
const fn sym_as(
    canonical: &'static str,
    typeset: &'static str,
    alias: &'static str,
    description: &'static str,
) -> SymbolEntry {
    SymbolEntry {
        canonical_form: Cow::Borrowed(canonical),
        typeset_form: Cow::Borrowed(typeset),
        plain_text_alias: Cow::Borrowed(alias),
        description: Cow::Borrowed(description),
    }
}

/// The built-in catalog, in rendering order.
pub static SYMBOLS: &[SymbolEntry] = &[
    // Specifying Systems, Table 8: ASCII forms of the typeset symbols
    sym(r"\land", r"/\ or \land", r"and, conjunction"),
    sym(r"\lor", r"\/ or \lor", r"or, disjunction"),
    sym_as(r"\lnot", r"{\lnot}", r"~ or \lnot or \neg", r"not"),
    sym(r"\in", r"\in", r"in"),
    sym(r"\notin", r"\notin", r"not in"),
    sym_as(r"\langle", r"{\langle}x, y{\rangle}", r"<< x, y>>", r"a tuple containing some x, y"),
    sym(r"<", r"<", r"less than"),
    sym(r"\leq", r"\leq or =<", r"less than or equal"),
    sym(r"\ll", r"\ll", r"much less?"),
    sym(r"\equiv", r"<=> or \equiv", r"is equivalent to"),
    sym(r">", r">", r"greater"),
    sym(r"\geq", r"\geq or >=", r"greater or equal"),
    sym(r"\gg", r"\gg", r"much greater?"),
    sym(r"\prec", r"\prec", r"precedes"),
    sym(r"\preceq", r"\preceq", r"precedes or equals"),
    sym(r"\succ", r"\succ", r"succeeds"),
    sym(r"\succeq", r"\succeq", r"succeeds or equals"),
    sym(r"\subset", r"\subset", r"subset"),
    sym(r"\subseteq", r"\subseteq", r"subset or equal"),
    sym(r"\sqsubset", r"\sqsubset", r"bag subset/is a refinement?"),
    sym(r"\sqsubseteq", r"\sqsubseteq", r"bag subset or equal/is a refinement or equal?"),
    sym(r"\vdash", r"|-", r""),
    sym(r"\models", r"|=", r"satisfies (a temporal formula)"),
    sym(r"\rightarrow", r"->", r"set of functions/step"),
    sym(r"\cap", r"\cap or \intersect", r"intersection"),
    sym(r"\sqcap", r"\sqcap", r""),
    sym(r"\oplus", r"(+) or \oplus", r"bag union"),
    sym(r"\ominus", r"(-) or \ominus", r"bag difference"),
    sym(r"\odot", r"(.) or \odot", r""),
    sym(r"\otimes", r"(\X) \otimes", r"Cartesian product"),
    sym(r"\oslash", r"(/) or \oslash", r""),
    sym_as(r"\E", r"\E\,", r"\E", r"for each"),
    sym_as(r"\EE", r"{\EE}", r"\EE", r"temporal existential quantification, 'hiding'"),
    sym_as(r"[A]_v", r"[A]_{ v}", r"[A]_v", r"action operator, 'square A sub v'"),
    sym_as(r"\WF", r"{\WF}_{ v}", r"WF_v", r"weak fairness variables"),
    sym_as(r"\SF", r"{\SF}_{ v}", r"SF_v", r"strong fairness variables"),
    sym(r"\supseteq", r"\supseteq", r"superset"),
    sym(r"\supset", r"\supset", r"superset or equals"),
    sym(r"\sqsupset", r"\sqsupset", r"bag superset"),
    sym(r"\sqsupseteq", r"\sqsupseteq", r"bag superset or equal"),
    sym(r"\dashv", r"-|", r""),
    sym(r"\eqdash", r"=|", r""),
    sym(r"\leftarrow", r"<-", r"substitution"),
    sym(r"\cup", r"\cup or \union", r"union"),
    sym(r"\sqcup", r"\sqcup", r""),
    sym(r"\uplus", r"\uplus", r""),
    sym(r"\times", r"\X or \times", r"multiply"),
    sym(r"\wr", r"\wr", r""),
    sym(r"\propto", r"\propto", r"propositional something?"),
    sym_as(r"\A", r"\A\,", r"\A", r"for all"),
    sym_as(r"\AA", r"{\AA}", r"\AA", r"temporal universal quantification"),
    sym_as(r"\langle A \rangle_v", r"{\langle}A{\rangle}_{ v}", r"<<A>>_v", r"action operator, 'angle A sub v', TODO"),
    sym(r"\implies", r"=>", r"implies"),
    sym(r"\defeq", r"==", r"is equivalent"),
    sym(r"\neq", r"\div", r"not equal?"),
    sym_as(r"\Box", r"{\Box}", r"[]", r"always in the future/henceforth"),
    sym_as(r"\Diamond", r"{\Diamond}", r"<>", r"sometime(s) in the future/eventually"),

    // Specifying Systems index entries missing from Table 8
    sym(r"\leadsto", r"~>", r"leads to"),
    sym_as(r"\whileop", r"E \whileop M", r"-+->", r"M remains true at least one step longer than E does"),
    sym(r"\mapsto", r"|->", r"function/record constructor"),
    sym(r"\div", r"\div", r"integer division"),
    sym(r"\cdot", r"\cdot", r"composition of actions"),
    sym(r"\circ", r"\o or \circ", r"concatenate sequences"),
    sym(r"\bullet", r"\doteq", r""),
    sym(r"\star", r"\star", r""),
    sym(r"\bigcirc", r"\bigcirc", r""),
    sym(r"\sim", r"\sim", r"stuttering equivalent"),
    sym(r"\simeq", r"\sim", r"stuttering equivalent"),
    sym(r"\asymp", r"\asymp", r""),
    sym(r"\approx", r"\approx", r""),
    sym(r"\cong", r"\cong", r""),
    sym(r"\doteq", r"\doteq", r""),
    sym_as(r"^", r"x ^{ y}", r"x\^{}y", r"exponentiation"),
    sym(r"'", r"'", r"prime"),
    sym(r"\sim", r"\sim", r"stuttering equivalent"),
    sym(r"!", r"!", r"new record (in EXCEPT expression)"),
    sym(r"@", r"@", r"previous record field value (in EXCEPT expression)"),
    sym(r":>", r":>", r"TLC module explicit function operator"),
    sym(r"@@", r"@@", r"TLC module explicit function operator"),

    // Greek letters
    sym(r"\alpha", r"\alpha", r"alpha"),
    sym(r"\beta", r"\beta", r"beta"),
    sym(r"\gamma", r"\gamma", r"gamma"),
    sym(r"\Gamma", r"\Gamma", r"Gamma"),
    sym(r"\delta", r"\delta", r"delta"),
    sym(r"\Delta", r"\Delta", r"Delta"),
    sym(r"\epsilon", r"\epsilon", r"epsilon"),
    sym(r"\zeta", r"\zeta", r"zeta"),
    sym(r"\eta", r"\eta", r"eta"),
    sym(r"\theta", r"\theta", r"theta"),
    sym(r"\Theta", r"\Theta", r"Theta"),
    sym(r"\iota", r"\iota", r"iota"),
    sym(r"\kappa", r"\kappa", r"kappa"),
    sym(r"\lambda", r"\lambda", r"lambda"),
    sym(r"\Lambda", r"\Lambda", r"Lambda"),
    sym(r"\mu", r"\mu", r"mu"),
    sym(r"\nu", r"\nu", r"nu"),
    sym(r"o", r"o", r"omicron"),
    sym(r"\pi", r"\pi", r"pi"),
    sym(r"\Pi", r"\Pi", r"Pi"),
    sym(r"\rho", r"\rho", r"rho"),
    sym(r"\sigma", r"\sigma", r"sigma"),
    sym(r"\Sigma", r"\Sigma", r"Sigma"),
    sym(r"\tau", r"\tau", r"tau"),
    sym(r"\upsilon", r"\upsilon", r"upsilon"),
    sym(r"\Upsilon", r"\Upsilon", r"Upsilon"),
    sym(r"\phi", r"\phi", r"phi"),
    sym(r"\Phi", r"\Phi", r"Phi"),
    sym(r"\chi", r"\chi", r"chi"),
    sym(r"\psi", r"\psi", r"psi"),
    sym(r"\Psi", r"\Psi", r"Psi"),
    sym(r"\omega", r"\omega", r"omega"),
    sym(r"\Omega", r"\Omega", r"Omega"),
];

lazy_static! {
    /// Alias alternative -> indices into [`SYMBOLS`], in catalog order
    pub static ref ALIAS_INDEX: HashMap<&'static str, Vec<usize>> = {
        let mut m: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, entry) in SYMBOLS.iter().enumerate() {
            if let Cow::Borrowed(alias) = entry.plain_text_alias {
                for alt in alias.split(ALIAS_SEPARATOR) {
                    let slots = m.entry(alt).or_default();
                    // an alias repeated within one entry is listed once
                    if slots.last() != Some(&i) {
                        slots.push(i);
                    }
                }
            }
        }
        m
    };
}

/// Look up built-in entries by one alias alternative.
pub fn lookup_alias(alias: &str) -> Vec<&'static SymbolEntry> {
    ALIAS_INDEX
        .get(alias)
        .map(|indices| indices.iter().map(|&i| &SYMBOLS[i]).collect())
        .unwrap_or_default()
}

/// An ordered, read-only list of symbol entries.
///
/// Renderers take a `&Catalog` rather than reaching for [`SYMBOLS`] so that
/// tests can feed them small hand-built catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SymbolEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<SymbolEntry>) -> Self {
        Self { entries }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(SYMBOLS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    /// Every entry listing `alias` among its alternatives, in catalog order.
    pub fn find_by_alias(&self, alias: &str) -> Vec<&SymbolEntry> {
        self.entries.iter().filter(|e| e.has_alias(alias)).collect()
    }
}

impl FromIterator<SymbolEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = SymbolEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_size_and_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 112);
        assert_eq!(catalog.entries()[0].typeset_form(), r"\land");
        assert_eq!(catalog.entries()[1].typeset_form(), r"\lor");
        assert_eq!(catalog.entries()[111].typeset_form(), r"\Omega");
    }

    #[test]
    fn test_known_data_quirks_are_preserved() {
        // `\neq` keeps its `\div` alias
        let neq = SYMBOLS.iter().find(|e| e.typeset_form() == r"\neq").unwrap();
        assert_eq!(neq.plain_text_alias(), r"\div");

        // the exact `\sim` duplicate survives
        let sims = SYMBOLS
            .iter()
            .filter(|e| e.typeset_form() == r"\sim")
            .count();
        assert_eq!(sims, 2);
    }

    #[test]
    fn test_composed_entries_have_canonical_form() {
        let tuple = &SYMBOLS[5];
        assert_eq!(tuple.typeset_form(), r"{\langle}x, y{\rangle}");
        assert_eq!(tuple.canonical_form(), r"\langle");

        let land = &SYMBOLS[0];
        assert_eq!(land.canonical_form(), land.typeset_form());
    }

    #[test]
    fn test_aliases_split() {
        let not = &SYMBOLS[2];
        let aliases: Vec<_> = not.aliases().collect();
        assert_eq!(aliases, vec!["~", r"\lnot", r"\neg"]);
        assert!(not.has_alias("~"));
        assert!(!not.has_alias("~ or"));
    }

    #[test]
    fn test_lookup_alias() {
        let found = lookup_alias(r"\sim");
        assert_eq!(found.len(), 3);
        assert!(found.iter().any(|e| e.typeset_form() == r"\simeq"));

        let land = lookup_alias(r"/\");
        assert_eq!(land.len(), 1);
        assert_eq!(land[0].description(), "and, conjunction");

        assert!(lookup_alias("no-such-alias").is_empty());
    }

    #[test]
    fn test_catalog_find_by_alias_matches_index() {
        let catalog = Catalog::builtin();
        for alias in [r"\div", r"\doteq", "=>", "[]"] {
            let from_catalog = catalog.find_by_alias(alias);
            let from_index = lookup_alias(alias);
            assert_eq!(from_catalog, from_index, "alias {}", alias);
        }
    }

    #[test]
    fn test_owned_entry() {
        let entry = SymbolEntry::new("x", "x", "").with_canonical("y");
        assert_eq!(entry.canonical_form(), "y");
        assert_eq!(entry.typeset_form(), "x");
        assert_eq!(entry.to_string(), "x  [x]");
    }
}
