//! Chain encoding for repeated children
//!
//! A sequence of `a, b, c` is stored as `Link(a) -> Link(b) -> Link(c) -> End`.
//! `End` is the family's sentinel, so an empty sequence and the tail of a
//! non-empty one are the same value and are dispatched to the same handler.

use std::mem;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Node, Position};
use crate::visit::Visitor;

/// An ordered sequence of nodes of one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chain<T> {
    /// One element followed by the rest of the chain
    Link(Box<Link<T>>),
    /// The end of the chain (the family's sentinel)
    End,
}

/// A single link in a [`Chain`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<T> {
    /// The element held by this link
    pub head: T,
    /// The remaining elements
    pub rest: Chain<T>,
    /// Source position of the element that started this link
    pub pos: Position,
}

impl<T> Chain<T> {
    /// The empty chain
    #[must_use]
    pub const fn end() -> Self {
        Chain::End
    }

    /// Prepend `head` to `rest`
    #[must_use]
    pub fn cons(head: T, rest: Chain<T>, pos: Position) -> Self {
        Chain::Link(Box::new(Link { head, rest, pos }))
    }

    /// Build a chain holding the given elements in order
    #[must_use]
    pub fn from_links<I>(links: I) -> Self
    where
        I: IntoIterator<Item = (T, Position)>,
        I::IntoIter: DoubleEndedIterator,
    {
        links
            .into_iter()
            .rev()
            .fold(Chain::End, |rest, (head, pos)| Chain::cons(head, rest, pos))
    }

    /// Returns true if this is the end of the chain
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Chain::End)
    }

    /// Returns true if the chain holds no elements
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_end()
    }

    /// The first element, if any
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        match self {
            Chain::Link(link) => Some(&link.head),
            Chain::End => None,
        }
    }

    /// Number of elements in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over the elements head-first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self }
    }

    /// Iterate over the links head-first
    pub fn links(&self) -> Links<'_, T> {
        Links { next: self }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::End
    }
}

// Unlink iteratively; the derived drop would recurse once per element.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut next = mem::take(self);
        while let Chain::Link(link) = &mut next {
            let rest = mem::take(&mut link.rest);
            next = rest;
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Chain`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    next: &'a Chain<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Chain::Link(link) => {
                self.next = &link.rest;
                Some(&link.head)
            }
            Chain::End => None,
        }
    }
}

/// Iterator over the links of a [`Chain`]
#[derive(Debug, Clone)]
pub struct Links<'a, T> {
    next: &'a Chain<T>,
}

impl<'a, T> Iterator for Links<'a, T> {
    type Item = &'a Link<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Chain::Link(link) => {
                self.next = &link.rest;
                Some(link)
            }
            Chain::End => None,
        }
    }
}

/// A node family whose values can be linked into a [`Chain`]
///
/// Each family routes its links and its end marker to its own pair of
/// visitor handlers.
pub trait Element: Node + Sized {
    /// Tag reported by a link of this family
    const LINK_TAG: &'static str;
    /// Tag reported by the end of a chain of this family
    const END_TAG: &'static str;

    /// Dispatch a link to its handler
    fn accept_link<V: Visitor + ?Sized>(
        link: &Link<Self>,
        visitor: &mut V,
        ctx: V::Context,
    ) -> V::Output;

    /// Dispatch the end marker to its handler
    fn accept_end<V: Visitor + ?Sized>(visitor: &mut V, ctx: V::Context) -> V::Output;
}

impl<T: Element> Node for Chain<T> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: V::Context) -> V::Output {
        match self {
            Chain::Link(link) => T::accept_link(link, visitor, ctx),
            Chain::End => T::accept_end(visitor, ctx),
        }
    }

    fn position(&self) -> Position {
        match self {
            Chain::Link(link) => link.pos,
            Chain::End => Position::SENTINEL,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_end()
    }

    fn tag(&self) -> &'static str {
        match self {
            Chain::Link(_) => T::LINK_TAG,
            Chain::End => T::END_TAG,
        }
    }
}

// Chains serialize as a flat list so long sequences don't nest.

#[derive(Serialize)]
struct LinkRef<'a, T> {
    head: &'a T,
    pos: Position,
}

#[derive(Deserialize)]
struct LinkEntry<T> {
    head: T,
    pos: Position,
}

impl<T: Serialize> Serialize for Chain<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.links().map(|link| LinkRef {
            head: &link.head,
            pos: link.pos,
        }))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Chain<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<LinkEntry<T>>::deserialize(deserializer)?;
        Ok(Self::from_links(
            entries.into_iter().map(|entry| (entry.head, entry.pos)),
        ))
    }
}
