//! Inline style declarations (`element.style`).
//!
//! [CSSOM § 6.6 CSSStyleDeclaration](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)

/// An element's inline declaration block.
///
/// Declarations keep insertion order; setting an existing property replaces
/// its value in place, like `style.setProperty()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// `style.getPropertyValue(property)`
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// `style.setProperty(property, value)`
    pub fn set(&mut self, property: &str, value: &str) {
        if let Some(slot) = self
            .declarations
            .iter_mut()
            .find(|(name, _)| name == property)
        {
            value.clone_into(&mut slot.1);
        } else {
            self.declarations
                .push((property.to_string(), value.to_string()));
        }
    }

    /// `style.removeProperty(property)`; returns the old value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self
            .declarations
            .iter()
            .position(|(name, _)| name == property)?;
        Some(self.declarations.remove(index).1)
    }

    /// Number of declarations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.declarations.len()
    }

    /// True when no declarations are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize as the `style` attribute would read: `a: b; c: d`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
