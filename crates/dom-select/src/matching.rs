//! Selector matching
//!
//! Right-to-left matching of compiled selectors against any tree that can
//! present its elements through [`Element`].

use crate::selector::{
    Combinator, ComplexSelector, CompoundSelector, PseudoClass, SelectorComponent, SelectorList,
};

/// Element view used by the matcher
///
/// Implementors are cheap handles (a tree reference plus an id); the
/// matcher clones them freely while walking.
pub trait Element: Clone {
    /// Lower-cased local name
    fn local_name(&self) -> &str;

    fn id(&self) -> Option<&str>;

    /// Case-sensitive class membership
    fn has_class(&self, name: &str) -> bool;

    /// Attribute value by lower-cased name
    fn attr(&self, name: &str) -> Option<&str>;

    fn parent_element(&self) -> Option<Self>;

    fn prev_sibling_element(&self) -> Option<Self>;

    fn next_sibling_element(&self) -> Option<Self>;

    /// Whether the parent is the document node
    fn is_root(&self) -> bool;

    /// No element children and no text
    fn is_empty(&self) -> bool;
}

impl SelectorList {
    /// Check whether any selector in the list matches `element`
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.selectors.iter().any(|s| s.matches(element))
    }
}

impl ComplexSelector {
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.compounds
            .first()
            .is_some_and(|subject| subject.matches(element) && self.matches_from(element, 0))
    }

    /// `element` matched `compounds[index]`; check the rest of the chain
    fn matches_from<E: Element>(&self, element: &E, index: usize) -> bool {
        let (Some(combinator), Some(next)) =
            (self.combinators.get(index), self.compounds.get(index + 1))
        else {
            return true;
        };

        match combinator {
            Combinator::Child => element
                .parent_element()
                .is_some_and(|p| next.matches(&p) && self.matches_from(&p, index + 1)),
            Combinator::Descendant => {
                let mut ancestor = element.parent_element();
                while let Some(a) = ancestor {
                    if next.matches(&a) && self.matches_from(&a, index + 1) {
                        return true;
                    }
                    ancestor = a.parent_element();
                }
                false
            }
            Combinator::NextSibling => element
                .prev_sibling_element()
                .is_some_and(|s| next.matches(&s) && self.matches_from(&s, index + 1)),
            Combinator::SubsequentSibling => {
                let mut sibling = element.prev_sibling_element();
                while let Some(s) = sibling {
                    if next.matches(&s) && self.matches_from(&s, index + 1) {
                        return true;
                    }
                    sibling = s.prev_sibling_element();
                }
                false
            }
        }
    }
}

impl CompoundSelector {
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        self.components.iter().all(|c| match_component(c, element))
    }
}

/// Match a selector component against an element
pub fn match_component<E: Element>(component: &SelectorComponent, element: &E) -> bool {
    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => element.local_name().eq_ignore_ascii_case(tag),
        SelectorComponent::Id(id) => element.id() == Some(id.as_str()),
        SelectorComponent::Class(class) => element.has_class(class),
        SelectorComponent::Attribute(attr) => attr.matches(element.attr(&attr.name)),
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(pseudo, element),
    }
}

/// Match a pseudo-class against an element
pub fn match_pseudo_class<E: Element>(pseudo: &PseudoClass, element: &E) -> bool {
    match pseudo {
        PseudoClass::Link | PseudoClass::AnyLink => is_link(element),
        PseudoClass::Visited => false,

        PseudoClass::Hover
        | PseudoClass::Active
        | PseudoClass::Focus
        | PseudoClass::FocusVisible
        | PseudoClass::FocusWithin
        | PseudoClass::Target => false,

        PseudoClass::Enabled => is_form_control(element) && !is_disabled(element),
        PseudoClass::Disabled => is_form_control(element) && is_disabled(element),
        PseudoClass::Checked => match element.local_name() {
            "input" => {
                let kind = element.attr("type").unwrap_or("");
                (kind.eq_ignore_ascii_case("checkbox") || kind.eq_ignore_ascii_case("radio"))
                    && element.attr("checked").is_some()
            }
            "option" => element.attr("selected").is_some(),
            _ => false,
        },
        PseudoClass::Required => is_requirable(element) && element.attr("required").is_some(),
        PseudoClass::Optional => is_requirable(element) && element.attr("required").is_none(),

        PseudoClass::Root => element.is_root(),
        PseudoClass::Empty => element.is_empty(),
        PseudoClass::FirstChild => element.prev_sibling_element().is_none(),
        PseudoClass::LastChild => element.next_sibling_element().is_none(),
        PseudoClass::OnlyChild => {
            element.prev_sibling_element().is_none() && element.next_sibling_element().is_none()
        }
        PseudoClass::FirstOfType => type_index(element) == 1,
        PseudoClass::LastOfType => type_index_from_end(element) == 1,
        PseudoClass::OnlyOfType => type_index(element) == 1 && type_index_from_end(element) == 1,
        PseudoClass::NthChild(expr) => expr.matches(sibling_index(element)),
        PseudoClass::NthLastChild(expr) => expr.matches(sibling_index_from_end(element)),
        PseudoClass::NthOfType(expr) => expr.matches(type_index(element)),
        PseudoClass::NthLastOfType(expr) => expr.matches(type_index_from_end(element)),

        PseudoClass::Not(list) => !list.matches(element),
        PseudoClass::Is(list) | PseudoClass::Where(list) => list.matches(element),

        PseudoClass::Lang(lang) => {
            // nearest inclusive ancestor with a lang attribute decides
            let mut current = Some(element.clone());
            while let Some(e) = current {
                if let Some(value) = e.attr("lang") {
                    let value = value.to_ascii_lowercase();
                    return value == *lang
                        || (value.starts_with(lang.as_str())
                            && value[lang.len()..].starts_with('-'));
                }
                current = e.parent_element();
            }
            false
        }
    }
}

fn is_link<E: Element>(element: &E) -> bool {
    matches!(element.local_name(), "a" | "area" | "link") && element.attr("href").is_some()
}

fn is_form_control<E: Element>(element: &E) -> bool {
    matches!(
        element.local_name(),
        "button" | "input" | "select" | "textarea" | "optgroup" | "option" | "fieldset"
    )
}

fn is_disabled<E: Element>(element: &E) -> bool {
    element.attr("disabled").is_some()
}

fn is_requirable<E: Element>(element: &E) -> bool {
    matches!(element.local_name(), "input" | "select" | "textarea")
}

/// 1-based index among element siblings
fn sibling_index<E: Element>(element: &E) -> i32 {
    count_while(element, |e| e.prev_sibling_element(), |_| true)
}

fn sibling_index_from_end<E: Element>(element: &E) -> i32 {
    count_while(element, |e| e.next_sibling_element(), |_| true)
}

/// 1-based index among element siblings with the same local name
fn type_index<E: Element>(element: &E) -> i32 {
    let name = element.local_name().to_string();
    count_while(element, |e| e.prev_sibling_element(), |e| e.local_name() == name)
}

fn type_index_from_end<E: Element>(element: &E) -> i32 {
    let name = element.local_name().to_string();
    count_while(element, |e| e.next_sibling_element(), |e| e.local_name() == name)
}

fn count_while<E, S, F>(element: &E, step: S, filter: F) -> i32
where
    E: Element,
    S: Fn(&E) -> Option<E>,
    F: Fn(&E) -> bool,
{
    let mut count = 1;
    let mut current = step(element);
    while let Some(e) = current {
        if filter(&e) {
            count += 1;
        }
        current = step(&e);
    }
    count
}
