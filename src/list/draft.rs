use crate::list::Quantity;

/// Name and quantity being typed for the next item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub quantity: Quantity,
}

impl Draft {
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Quantity plus one, unbounded above.
    pub fn increment_quantity(&self) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity.increment(),
        }
    }

    /// Quantity minus one, floored at one.
    pub fn decrement_quantity(&self) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity.decrement().unwrap_or(self.quantity),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: self.quantity,
        }
    }

    pub fn push_str(&self, text: &str) -> Self {
        let mut name = self.name.clone();
        name.push_str(text);
        self.with_name(name)
    }

    /// Drops the last character of the name, if any.
    pub fn pop_char(&self) -> Self {
        let mut name = self.name.clone();
        name.pop();
        self.with_name(name)
    }
}
