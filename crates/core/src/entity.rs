//! Entities: records identified by a key rather than by their contents.

use core::borrow::Borrow;

/// A record with a stable identifier.
///
/// Products are keyed by [`crate::Sku`], orders by [`crate::OrderId`].
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity whose id equals `id` exactly.
///
/// `id` may be any borrowed form of the id type, e.g. `&str` for a SKU.
pub fn find_by_id<'a, E, Q>(items: &'a [E], id: &Q) -> Option<&'a E>
where
    E: Entity,
    E::Id: Borrow<Q>,
    Q: Eq + ?Sized,
{
    items.iter().find(|item| <E::Id as Borrow<Q>>::borrow(item.id()) == id)
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut<'a, E, Q>(items: &'a mut [E], id: &Q) -> Option<&'a mut E>
where
    E: Entity,
    E::Id: Borrow<Q>,
    Q: Eq + ?Sized,
{
    items.iter_mut().find(|item| <E::Id as Borrow<Q>>::borrow(item.id()) == id)
}
