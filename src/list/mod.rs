//! Shopping list domain values.
//!
//! Every operation here takes `&self` and returns a new snapshot. Items have
//! no identity beyond their position, so updates and removals are addressed
//! by index into the snapshot the caller is currently looking at.

mod draft;
mod item;
mod quantity;

pub use draft::Draft;
pub use item::ShoppingItem;
pub use quantity::Quantity;

/// Result of [`ShoppingList::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item appended. The caller should reset its draft.
    Appended(ShoppingList),
    /// Name was empty; nothing changed.
    EmptyName,
}

/// Ordered items; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&ShoppingItem> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_checked()).count()
    }

    /// Appends an unchecked item. An empty name is refused.
    pub fn add_item(&self, name: &str, quantity: Quantity) -> AddOutcome {
        if name.is_empty() {
            return AddOutcome::EmptyName;
        }
        let mut items = self.items.clone();
        items.push(ShoppingItem::new(name, quantity));
        AddOutcome::Appended(Self { items })
    }

    /// Replaces the quantity at `position`. Out of range leaves the list as is.
    pub fn set_quantity(&self, position: usize, quantity: Quantity) -> Self {
        self.replace_at(position, |item| item.with_quantity(quantity))
    }

    /// Replaces the checked flag at `position`. Out of range leaves the list as is.
    pub fn set_checked(&self, position: usize, checked: bool) -> Self {
        self.replace_at(position, |item| item.with_checked(checked))
    }

    /// Removes the item at `position`; later items shift down by one.
    pub fn remove_at(&self, position: usize) -> Self {
        if position >= self.items.len() {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.remove(position);
        Self { items }
    }

    fn replace_at(
        &self,
        position: usize,
        update: impl FnOnce(&ShoppingItem) -> ShoppingItem,
    ) -> Self {
        let mut items = self.items.clone();
        if let Some(slot) = items.get_mut(position) {
            *slot = update(slot);
        }
        Self { items }
    }
}

impl FromIterator<ShoppingItem> for ShoppingList {
    fn from_iter<I: IntoIterator<Item = ShoppingItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
