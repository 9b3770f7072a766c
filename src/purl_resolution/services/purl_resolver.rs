use crate::purl_resolution::domain::{Advisory, Branch, FullProductName, ProductId, Purl};
use std::collections::HashMap;

/// Deepest branch level that is descended into.
///
/// Well-formed advisories nest a handful of levels (vendor, product name,
/// version, ...). Branches below this level are skipped, not walked.
pub const MAX_BRANCH_DEPTH: usize = 64;

/// Whether a resolver holds results from at least one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    /// Just constructed or just cleared
    Idle,
    /// At least one advisory has been run since the last clear
    Populated,
}

/// PurlResolver finds the package URLs of a fixed set of product ids
///
/// Each tracked product id owns one slot, in the order the ids were given.
/// Running an advisory appends every purl attached to a tracked id to that
/// id's slot, skipping purls the slot already holds. Results accumulate over
/// runs until [`PurlResolver::clear`] is called.
///
/// Traversal order decides result order: `full_product_names` first, then the
/// branch forest depth-first pre-order with children in listed order.
///
/// # Example
/// ```
/// use csaf_purls::purl_resolution::domain::{Advisory, FullProductName, ProductId, ProductTree};
/// use csaf_purls::purl_resolution::services::PurlResolver;
///
/// let advisory = Advisory::new(Some(ProductTree::new(
///     vec![FullProductName::with_purl("P1", "pkg:generic/a")],
///     vec![],
/// )));
///
/// let mut resolver = PurlResolver::new(vec![ProductId::from("P1"), ProductId::from("P2")]);
/// resolver.run(&advisory);
///
/// assert_eq!(resolver.references(&ProductId::from("P1")).len(), 1);
/// assert!(resolver.references(&ProductId::from("P2")).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PurlResolver {
    product_ids: Vec<ProductId>,
    slot_by_id: HashMap<ProductId, usize>,
    purls: Vec<Vec<Purl>>,
    max_depth: usize,
    state: ResolverState,
    truncated_branches: usize,
}

impl PurlResolver {
    /// Creates a resolver tracking `product_ids` in the given order
    ///
    /// Duplicate ids are kept and each occurrence gets its own slot, but only
    /// the first one is ever filled. Later duplicates stay empty.
    pub fn new<I>(product_ids: I) -> Self
    where
        I: IntoIterator<Item = ProductId>,
    {
        let product_ids: Vec<ProductId> = product_ids.into_iter().collect();

        let mut slot_by_id: HashMap<ProductId, usize> = HashMap::new();
        for (slot, id) in product_ids.iter().enumerate() {
            slot_by_id.entry(id.clone()).or_insert(slot);
        }

        let purls = vec![Vec::new(); product_ids.len()];

        Self {
            product_ids,
            slot_by_id,
            purls,
            max_depth: MAX_BRANCH_DEPTH,
            state: ResolverState::Idle,
            truncated_branches: 0,
        }
    }

    /// Overrides the branch depth bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    pub fn slot_count(&self) -> usize {
        self.purls.len()
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// Number of branches skipped by the depth bound during the last run
    pub fn truncated_branches(&self) -> usize {
        self.truncated_branches
    }

    /// Forgets every found purl, keeping the tracked ids
    pub fn clear(&mut self) {
        for slot in &mut self.purls {
            slot.clear();
        }
        self.truncated_branches = 0;
        self.state = ResolverState::Idle;
    }

    /// Collects the purls of tracked products in `advisory`
    ///
    /// An advisory without a product tree leaves the results untouched.
    pub fn run(&mut self, advisory: &Advisory) {
        self.state = ResolverState::Populated;
        self.truncated_branches = 0;

        let Some(tree) = advisory.product_tree.as_ref() else {
            return;
        };

        for product in &tree.full_product_names {
            self.add(product);
        }

        // Pre-order walk: children are pushed reversed so the first child pops first.
        let mut pending: Vec<(&Branch, usize)> =
            tree.branches.iter().rev().map(|branch| (branch, 1)).collect();

        while let Some((branch, depth)) = pending.pop() {
            if depth > self.max_depth {
                self.truncated_branches += 1;
                continue;
            }

            if let Some(product) = branch.product.as_ref() {
                self.add(product);
            }

            pending.extend(
                branch
                    .branches
                    .iter()
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }
    }

    fn add(&mut self, product: &FullProductName) {
        let (Some(id), Some(purl)) = (product.product_id.as_ref(), product.purl()) else {
            return;
        };

        let Some(&slot) = self.slot_by_id.get(id) else {
            return;
        };

        let found = &mut self.purls[slot];
        if !found.contains(purl) {
            found.push(purl.clone());
        }
    }

    /// Purls found for `product_id`, in discovery order
    ///
    /// Empty when the id is not tracked or nothing was found.
    pub fn references(&self, product_id: &ProductId) -> &[Purl] {
        self.slot_by_id
            .get(product_id)
            .map(|&slot| self.purls[slot].as_slice())
            .unwrap_or(&[])
    }

    /// Purls of the slot at `index`, `None` when out of range
    pub fn slot(&self, index: usize) -> Option<&[Purl]> {
        self.purls.get(index).map(Vec::as_slice)
    }

    /// Tracked ids with at least one purl, in slot order
    pub fn entries(&self) -> impl Iterator<Item = (&ProductId, &[Purl])> + '_ {
        self.product_ids
            .iter()
            .zip(&self.purls)
            .filter(|(_, purls)| !purls.is_empty())
            .map(|(id, purls)| (id, purls.as_slice()))
    }

    /// All found purls, slot by slot
    pub fn report(&self) -> Vec<&Purl> {
        self.purls.iter().flatten().collect()
    }

    /// Total number of purls over all slots
    pub fn found_count(&self) -> usize {
        self.purls.iter().map(Vec::len).sum()
    }
}
