use crate::list::Quantity;

/// One line of the shopping list.
///
/// The name is fixed at creation; only quantity and the checked flag change,
/// and every change produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    name: String,
    quantity: Quantity,
    checked: bool,
}

impl ShoppingItem {
    /// New unchecked item.
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
            checked: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            checked,
            ..self.clone()
        }
    }
}
