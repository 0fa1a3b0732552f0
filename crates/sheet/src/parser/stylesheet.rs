use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    PseudoClass(String),
    /// A functional pseudo-class such as `:nth-of-type(2)`, with its raw argument.
    PseudoFunction(String, String),
    Attribute(String, String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => write!(f, "{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Universal => write!(f, "*"),
            Selector::PseudoClass(name) => write!(f, ":{name}"),
            Selector::PseudoFunction(name, arg) => write!(f, ":{name}({arg})"),
            Selector::Attribute(name, value) if value.is_empty() => write!(f, "[{name}]"),
            Selector::Attribute(name, value) => write!(f, "[{name}={value}]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.selectors {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The separator written between this part and the next one.
    fn separator(self) -> &'static str {
        match self {
            Combinator::None => "",
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::AdjacentSibling => " + ",
            Combinator::GeneralSibling => " ~ ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

impl SelectorPart {
    pub fn new(compound: CompoundSelector, combinator: Combinator) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn new(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}{}", part.compound, part.combinator.separator())?;
        }
        Ok(())
    }
}

/// A comma-separated group of selectors heading one rule.
///
/// Its `Display` output is the canonical selector text that rule lookups
/// compare against: `nav>ul` and `nav  >  ul` both serialize as `nav > ul`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn new(selectors: Vec<ComplexSelector>) -> Self {
        Self { selectors }
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}

/// A single `property: value` pair with its value kept as raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: SelectorList,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selectors: SelectorList, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// Canonical selector text, e.g. `footer > ul`.
    pub fn selector_text(&self) -> String {
        self.selectors.to_string()
    }

    /// Looks up the raw value of `property`.
    ///
    /// When a property is declared more than once the last `!important`
    /// declaration wins, otherwise the last declaration. Empty values count
    /// as absent.
    pub fn property_value(&self, property: &str) -> Option<&str> {
        let mut candidates = self
            .declarations
            .iter()
            .rev()
            .filter(|d| d.property == property);
        let last = candidates.next()?;
        let winner = if last.important {
            last
        } else {
            candidates.find(|d| d.important).unwrap_or(last)
        };
        Some(winner.value.as_str()).filter(|v| !v.is_empty())
    }
}

#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
}

impl StyleSheet {
    /// Iterates over the rules whose canonical selector text equals `selector`.
    pub fn rules_for<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.selector_text() == selector)
    }
}
