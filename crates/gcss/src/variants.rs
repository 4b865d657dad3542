//! Single-inheritance resolution for named style variants.
//!
//! Each variant may `extend` at most one other variant. The `extends` links
//! form a forest of simple chains, and every variant's styles must also reach
//! every public variant further down its chain.
//!
//! For variant `V`, [`VariantGraph::dependents`] lists the public variants
//! that should receive `V`'s styles: `V` itself if it is public, plus every
//! public variant that extends it directly or transitively. Formatted as
//! `&.<name>` fragments those names become the selector list of `V`'s rule,
//! so one rule matches every element whose class list carries any of them.
//!
//! ```rust
//! use gcss::variants::{Extends, resolve_variants};
//! use indexmap::IndexMap;
//!
//! struct Def(Option<&'static str>);
//!
//! impl Extends for Def {
//!     fn extends(&self) -> Option<&str> {
//!         self.0
//!     }
//! }
//!
//! let mut variants = IndexMap::new();
//! variants.insert("primary".to_string(), Def(None));
//! variants.insert("danger".to_string(), Def(Some("primary")));
//!
//! let graph = resolve_variants(&variants).unwrap();
//! assert_eq!(graph.dependents("primary"), ["primary", "danger"]);
//! assert_eq!(graph.dependents("danger"), ["danger"]);
//! assert_eq!(graph.selectors("primary"), ["&.primary", "&.danger"]);
//! ```
//!
//! ## Build order
//!
//! Rules for a variant must render after the rules of every variant it
//! extends, so that direct overrides beat inherited styles at equal
//! specificity. [`VariantGraph::build_order`] sorts variants by chain depth
//! (roots first), keeping declaration order among variants of the same
//! depth. The order is therefore correct no matter where a base variant is
//! declared.

use indexmap::IndexMap;
use log::debug;

use crate::error::{GcssError, Result};
use crate::selector::{class_fragment, is_private};

/// A variant definition that may name the variant it extends.
pub trait Extends {
    fn extends(&self) -> Option<&str>;
}

/// Resolved `extends` forest of one variant map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantGraph {
    parents: IndexMap<String, Option<String>>,
    dependents: IndexMap<String, Vec<String>>,
    order: Vec<String>,
}

/// Validates a variant map and computes dependents and build order.
///
/// Fails with [`GcssError::UnknownExtends`] when a variant extends a name
/// missing from the map, and with [`GcssError::ExtendsCycle`] when following
/// `extends` from any variant (public or private) never ends. The cycle
/// error names the earliest declared variant on the cycle itself, never a
/// variant that merely leads into it.
pub fn resolve_variants<V: Extends>(variants: &IndexMap<String, V>) -> Result<VariantGraph> {
    let mut parents = IndexMap::with_capacity(variants.len());
    for (name, definition) in variants {
        let parent = definition.extends().map(str::to_string);
        if let Some(target) = &parent {
            if !variants.contains_key(target) {
                return Err(GcssError::UnknownExtends {
                    variant: name.clone(),
                    target: target.clone(),
                });
            }
        }
        parents.insert(name.clone(), parent);
    }

    let mut graph = VariantGraph {
        parents,
        dependents: IndexMap::with_capacity(variants.len()),
        order: Vec::with_capacity(variants.len()),
    };

    let mut depths = Vec::with_capacity(variants.len());
    for name in graph.parents.keys() {
        depths.push((graph.depth(name)?, name.clone()));
        graph.dependents.insert(name.clone(), Vec::new());
    }

    for name in graph.parents.keys().filter(|name| !is_private(name)) {
        let mut current = Some(name.as_str());
        while let Some(cur) = current {
            if let Some(list) = graph.dependents.get_mut(cur) {
                list.push(name.clone());
            }
            current = graph.parents.get(cur).and_then(|parent| parent.as_deref());
        }
    }

    // Stable sort keeps declaration order within one depth.
    depths.sort_by_key(|(depth, _)| *depth);
    graph.order = depths.into_iter().map(|(_, name)| name).collect();

    debug!(
        "Resolved {} variants ({} public)",
        graph.parents.len(),
        graph.public_names().count()
    );
    Ok(graph)
}

impl VariantGraph {
    /// Public variants that receive `name`'s styles, in declaration order.
    ///
    /// Empty for unknown names and for private variants no public variant
    /// extends.
    pub fn dependents(&self, name: &str) -> &[String] {
        self.dependents
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `&.<name>` selector fragments for every dependent of `name`.
    pub fn selectors(&self, name: &str) -> Vec<String> {
        self.dependents(name)
            .iter()
            .map(|dependent| class_fragment(dependent))
            .collect()
    }

    /// The chain from the root of `name`'s tree down to `name` itself.
    pub fn chain(&self, name: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.parents.get_key_value(name).map(|(k, _)| k.as_str());
        while let Some(cur) = current {
            chain.push(cur);
            current = self.parent(cur);
        }
        chain.reverse();
        chain
    }

    /// The variant `name` directly extends.
    pub fn parent(&self, name: &str) -> Option<&str> {
        self.parents.get(name).and_then(|parent| parent.as_deref())
    }

    /// All variants, roots first, each after every variant it extends.
    pub fn build_order(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Variants an end user may select, in declaration order.
    pub fn public_names(&self) -> impl Iterator<Item = &str> {
        self.parents
            .keys()
            .map(String::as_str)
            .filter(|name| !is_private(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    /// True for known variants without the private prefix.
    pub fn is_public(&self, name: &str) -> bool {
        self.contains(name) && !is_private(name)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn depth(&self, name: &str) -> Result<usize> {
        let mut depth = 0;
        let mut current = self.parent(name);
        while let Some(cur) = current {
            depth += 1;
            if depth >= self.parents.len() {
                return Err(GcssError::ExtendsCycle {
                    variant: self.cycle_head(cur).to_string(),
                });
            }
            current = self.parent(cur);
        }
        Ok(depth)
    }

    /// The earliest declared variant on the cycle through `member`.
    ///
    /// `member` must lie on a cycle, which holds for any variant reached
    /// after more steps than there are variants.
    fn cycle_head<'a>(&'a self, member: &'a str) -> &'a str {
        let mut head = member;
        let mut current = self.parent(member);
        while let Some(cur) = current {
            if cur == member {
                break;
            }
            if self.parents.get_index_of(cur) < self.parents.get_index_of(head) {
                head = cur;
            }
            current = self.parent(cur);
        }
        head
    }
}
