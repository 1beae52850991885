//! Selector model
//!
//! Compiled form of a selector list: complex selectors made of compound
//! selectors joined by combinators, each compound a set of simple
//! components.

/// Comma-separated list of complex selectors
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

/// Compound selectors joined by combinators
///
/// Stored right to left: `compounds[0]` is the subject, and
/// `combinators[i]` joins `compounds[i]` to `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

/// Simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

/// Relationship between two compound selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

/// A component of a selector
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Universal selector *
    Universal,
    /// Type selector (lower-cased tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr], [attr=value], etc.
    Attribute(AttributeSelector),
    /// Pseudo-class :first-child, :nth-child(), etc.
    PseudoClass(PseudoClass),
}

/// Pseudo-class type
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    // Link pseudo-classes
    Link,
    AnyLink,
    Visited,

    // User action pseudo-classes; a parsed tree has no user state
    Hover,
    Active,
    Focus,
    FocusVisible,
    FocusWithin,
    Target,

    // Input pseudo-classes
    Enabled,
    Disabled,
    Checked,
    Required,
    Optional,

    // Tree-structural pseudo-classes
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthChild(NthExpression),
    NthLastChild(NthExpression),
    NthOfType(NthExpression),
    NthLastOfType(NthExpression),

    // Logical pseudo-classes
    Not(SelectorList),
    Is(SelectorList),
    Where(SelectorList),

    Lang(String),
}

impl PseudoClass {
    /// Look up an argument-less pseudo-class by its lower-cased name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "link" => Self::Link,
            "any-link" => Self::AnyLink,
            "visited" => Self::Visited,
            "hover" => Self::Hover,
            "active" => Self::Active,
            "focus" => Self::Focus,
            "focus-visible" => Self::FocusVisible,
            "focus-within" => Self::FocusWithin,
            "target" => Self::Target,
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            "checked" => Self::Checked,
            "required" => Self::Required,
            "optional" => Self::Optional,
            "root" => Self::Root,
            "empty" => Self::Empty,
            "first-child" => Self::FirstChild,
            "last-child" => Self::LastChild,
            "only-child" => Self::OnlyChild,
            "first-of-type" => Self::FirstOfType,
            "last-of-type" => Self::LastOfType,
            "only-of-type" => Self::OnlyOfType,
            _ => return None,
        })
    }
}

/// Argument of the `:nth-*` pseudo-classes
///
/// Selects the 1-based positions `n` for which some `k >= 0` gives
/// `a * k + b == n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthExpression {
    pub a: i32,
    pub b: i32,
}

impl NthExpression {
    pub const ODD: Self = Self { a: 2, b: 1 };
    pub const EVEN: Self = Self { a: 2, b: 0 };

    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Parse the text between the parentheses: `odd`, `even`, a bare
    /// integer, or `An+B` with optional whitespace anywhere.
    pub fn parse(text: &str) -> Option<Self> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match compact.as_str() {
            "odd" => return Some(Self::ODD),
            "even" => return Some(Self::EVEN),
            _ => {}
        }

        let Some((step, offset)) = compact.split_once('n') else {
            return compact.parse().ok().map(|b| Self::new(0, b));
        };
        let a = match step {
            "" | "+" => 1,
            "-" => -1,
            digits => digits.parse().ok()?,
        };
        let b = match offset.as_bytes().first() {
            None => 0,
            Some(b'+' | b'-') => offset.parse().ok()?,
            Some(_) => return None,
        };
        Some(Self::new(a, b))
    }

    /// Whether the 1-based position `n` is selected
    pub fn matches(&self, n: i32) -> bool {
        // widened so that extreme offsets cannot overflow
        let a = i64::from(self.a);
        let delta = i64::from(n) - i64::from(self.b);
        if a == 0 {
            return delta == 0;
        }
        delta % a == 0 && delta / a >= 0
    }
}

/// `[name]` or `[name op value]`
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    /// Lower-cased attribute name
    pub name: String,
    /// `None` for a bare presence test
    pub matcher: Option<AttributeMatcher>,
    /// `i` flag: compare values ASCII case-insensitively
    pub case_insensitive: bool,
}

/// Value operator and its operand
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMatcher {
    /// `=`
    Exact(String),
    /// `~=`, one of the whitespace-separated words
    Contains(String),
    /// `|=`, the whole value or a `value-` prefix
    DashMatch(String),
    /// `^=`
    Prefix(String),
    /// `$=`
    Suffix(String),
    /// `*=`
    Substring(String),
}

impl AttributeSelector {
    /// Test an element's value for this attribute, `None` when it is absent
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let Some(matcher) = &self.matcher else {
            return true;
        };
        if self.case_insensitive {
            matcher.test(
                &value.to_ascii_lowercase(),
                &matcher.operand().to_ascii_lowercase(),
            )
        } else {
            matcher.test(value, matcher.operand())
        }
    }
}

impl AttributeMatcher {
    pub fn operand(&self) -> &str {
        match self {
            Self::Exact(s)
            | Self::Contains(s)
            | Self::DashMatch(s)
            | Self::Prefix(s)
            | Self::Suffix(s)
            | Self::Substring(s) => s,
        }
    }

    fn test(&self, value: &str, operand: &str) -> bool {
        match self {
            Self::Exact(_) => value == operand,
            Self::Contains(_) => value.split_ascii_whitespace().any(|word| word == operand),
            Self::DashMatch(_) => value
                .strip_prefix(operand)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-')),
            // an empty operand never matches these three
            Self::Prefix(_) => !operand.is_empty() && value.starts_with(operand),
            Self::Suffix(_) => !operand.is_empty() && value.ends_with(operand),
            Self::Substring(_) => !operand.is_empty() && value.contains(operand),
        }
    }
}
