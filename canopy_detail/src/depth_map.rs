// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The depth map: region forest, element index, and incremental
//! reclassification.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use canopy_view2d::DiagramViewport;

use crate::level::DetailLevel;
use crate::options::DetailOptions;
use crate::region::{Region, RegionId};
use crate::scene::SceneModel;

/// The regions an element relates to: the nearest strict ancestor region
/// that contains it, and the region the element itself provides for its
/// descendants if it is a region boundary.
///
/// For any resolved drawn element at least one of the two is present; the
/// model root resolves to an empty record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementRegions {
    /// The nearest strict ancestor region, if any.
    pub containing: Option<RegionId>,
    /// The region this element defines for its own descendants, if any.
    pub providing: Option<RegionId>,
}

/// The inputs the last classification ran against.
#[derive(Clone, Debug, PartialEq)]
struct Memo {
    viewport: DiagramViewport,
    options: DetailOptions,
}

/// Detail-level manager for one diagram model.
///
/// The depth map owns the forest of [`Region`]s discovered so far and an
/// index from scene-element ids to their [`ElementRegions`] record. Regions
/// are discovered lazily, as elements are first visited during a render
/// walk, never eagerly for the whole model.
///
/// Per frame, hosts call [`DepthMap::update_detail_levels`] once before any
/// element is visited, then consult
/// [`DepthMap::render_gate`](crate::RenderDecision) per element. Between
/// frames the map keeps the **critical** set: regions whose detail level
/// differs from at least one immediate child's. Those boundary regions, and
/// their neighborhoods, are the only ones rechecked when the viewport
/// changes, which bounds recomputation by the size of the detail boundary
/// rather than the tree.
///
/// A depth map belongs to exactly one model. It is an ordinary owned value:
/// create it alongside the rendering session, pass it by reference, and
/// [`DepthMap::ensure_model`] it on every incoming model so a model switch
/// resets it wholesale.
///
/// All region links are arena ids, so a reset is a plain clear, with no
/// back-references to chase.
#[derive(Clone, Debug)]
pub struct DepthMap<Id>
where
    Id: Copy + Eq + Hash,
{
    model_root: Id,
    regions: Vec<Region<Id>>,
    roots: Vec<RegionId>,
    index: HashMap<Id, ElementRegions>,
    /// Regions whose detail level differs from at least one child's.
    critical: HashSet<RegionId>,
    /// Elements whose children were skipped by the render gate.
    omitted: HashSet<Id>,
    memo: Option<Memo>,
    evaluations: u64,
}

impl<Id> DepthMap<Id>
where
    Id: Copy + Eq + Hash,
{
    /// Creates an empty depth map for the model rooted at `model_root`.
    #[must_use]
    pub fn new(model_root: Id) -> Self {
        Self {
            model_root,
            regions: Vec::new(),
            roots: Vec::new(),
            index: HashMap::new(),
            critical: HashSet::new(),
            omitted: HashSet::new(),
            memo: None,
            evaluations: 0,
        }
    }

    /// Returns the model root this map was built for.
    #[must_use]
    pub fn model_root(&self) -> Id {
        self.model_root
    }

    /// Makes the map track the model rooted at `model_root`.
    ///
    /// A no-op when the root is unchanged; otherwise a full
    /// [`DepthMap::reset`]. Call this whenever a model arrives, so loading
    /// a new diagram discards state from the old one.
    pub fn ensure_model(&mut self, model_root: Id) {
        if self.model_root != model_root {
            self.reset(model_root);
        }
    }

    /// Discards all regions, index entries, and memoized inputs, and starts
    /// tracking the model rooted at `model_root`.
    ///
    /// The evaluation counter is cumulative and survives resets.
    pub fn reset(&mut self, model_root: Id) {
        self.model_root = model_root;
        self.regions.clear();
        self.roots.clear();
        self.index.clear();
        self.critical.clear();
        self.omitted.clear();
        self.memo = None;
    }

    /// Returns the region with the given id, if it is live in this map.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region<Id>> {
        self.regions.get(id.idx())
    }

    /// Returns the root regions: those anchored at immediate children of
    /// the model root, in discovery order.
    #[must_use]
    pub fn root_regions(&self) -> &[RegionId] {
        &self.roots
    }

    /// Returns the number of regions discovered so far.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the region currently straddles a detail boundary.
    #[must_use]
    pub fn is_critical(&self, id: RegionId) -> bool {
        self.critical.contains(&id)
    }

    /// Returns the number of regions currently straddling a detail
    /// boundary.
    #[must_use]
    pub fn critical_len(&self) -> usize {
        self.critical.len()
    }

    /// Returns the total number of detail-level evaluations performed.
    ///
    /// The counter only ever grows; observing it before and after an
    /// operation measures how much classification work the operation did.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Resolves the [`ElementRegions`] record for `element`, creating
    /// regions for it and any unresolved ancestors on first visit.
    ///
    /// Resolution is memoized: revisiting an element returns the cached
    /// record without recomputation. Unresolved ancestors are collected
    /// first and then resolved root-to-leaf, so arbitrarily deep models
    /// cannot exhaust the call stack.
    ///
    /// Rules per element:
    /// - An immediate child of the model root always anchors a new root
    ///   region.
    /// - Otherwise, an element whose rendering describes a non-empty child
    ///   area ([`SceneModel::provides_region`]) anchors a new region,
    ///   linked under the element's containing region.
    /// - Every element inherits its containing region from its parent.
    ///
    /// Newly created regions are classified immediately against the given
    /// viewport and thresholds.
    pub fn resolve<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
    ) -> ElementRegions {
        if element == self.model_root {
            return ElementRegions::default();
        }
        if let Some(found) = self.index.get(&element) {
            return *found;
        }

        // Collect the unresolved ancestor chain, then resolve it
        // root-to-leaf so every element finds its parent's record in the
        // index.
        let mut chain = Vec::new();
        let mut cursor = element;
        loop {
            chain.push(cursor);
            match scene.parent(cursor) {
                Some(parent)
                    if parent != self.model_root && !self.index.contains_key(&parent) =>
                {
                    cursor = parent;
                }
                _ => break,
            }
        }

        let mut record = ElementRegions::default();
        while let Some(e) = chain.pop() {
            record = self.resolve_one(scene, viewport, options, e);
        }
        record
    }

    /// Returns the nearest strict ancestor region of `element`, resolving
    /// it first if needed.
    pub fn containing_region<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
    ) -> Option<RegionId> {
        self.resolve(scene, viewport, options, element).containing
    }

    /// Returns the region `element` provides for its descendants, resolving
    /// it first if needed.
    pub fn providing_region<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
    ) -> Option<RegionId> {
        self.resolve(scene, viewport, options, element).providing
    }

    /// Brings every region's detail level up to date with the viewport and
    /// thresholds. Call once per render pass, before any element is
    /// visited.
    ///
    /// If both inputs are unchanged since the last call this returns
    /// immediately. Otherwise, if no region currently straddles a detail
    /// boundary (a fresh model, or a tree that converged to uniform
    /// levels), the forest is reseeded from the root regions; in the steady
    /// state only the critical boundary and its neighborhood are
    /// rechecked.
    pub fn update_detail_levels<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
    ) {
        let memo = Memo {
            viewport: viewport.clone(),
            options: *options,
        };
        if self.memo.as_ref() == Some(&memo) {
            return;
        }
        self.memo = Some(memo);

        if self.critical.is_empty() {
            for root in self.roots.clone() {
                let level = self.evaluate(root, scene, viewport, options);
                if level.is_full() {
                    self.update_region_detail_level(scene, viewport, options, root, level);
                } else {
                    self.recursive_set_oob(root, level);
                }
            }
        } else {
            self.check_critical_regions(scene, viewport, options);
        }
    }

    /// One detail-level evaluation, counted.
    fn evaluate<S: SceneModel<Id = Id>>(
        &mut self,
        region: RegionId,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
    ) -> DetailLevel {
        self.evaluations += 1;
        self.regions[region.idx()].compute_detail_level(scene, viewport, options)
    }

    /// Applies a full-detail level to `region` and walks into its subtree,
    /// classifying children as it goes.
    ///
    /// Children that stay at full detail are walked the same way; degraded
    /// children are handed to [`DepthMap::recursive_set_oob`]. A region
    /// with at least one child below its own level straddles the detail
    /// boundary and is kept in the critical set; one whose children all
    /// match is removed from it.
    fn update_region_detail_level<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        region: RegionId,
        level: DetailLevel,
    ) {
        let mut stack = alloc::vec![(region, level)];
        while let Some((r, lvl)) = stack.pop() {
            self.regions[r.idx()].set_detail(lvl);

            let children: Vec<RegionId> = self.regions[r.idx()].children().to_vec();
            let mut straddles = false;
            for child in children {
                let child_level = self.evaluate(child, scene, viewport, options);
                if child_level < lvl {
                    straddles = true;
                }
                if child_level.is_full() {
                    stack.push((child, child_level));
                } else {
                    self.recursive_set_oob(child, child_level);
                }
            }
            if straddles {
                self.critical.insert(r);
            } else {
                self.critical.remove(&r);
            }
        }
    }

    /// Forces `region` and every more-detailed descendant down to `level`.
    ///
    /// A parent that is not at full detail bounds all descendants to at
    /// most its own level. Descendants already at or below `level` are left
    /// untouched: they were degraded for an independent reason and keep
    /// their own finer-grained state. Degraded regions cannot straddle a
    /// detail boundary, so each one visited leaves the critical set.
    fn recursive_set_oob(&mut self, region: RegionId, level: DetailLevel) {
        let mut stack = alloc::vec![region];
        while let Some(r) = stack.pop() {
            self.regions[r.idx()].set_detail(level);
            self.critical.remove(&r);

            let children: Vec<RegionId> = self.regions[r.idx()].children().to_vec();
            for child in children {
                if self.regions[child.idx()].detail() > level {
                    stack.push(child);
                }
            }
        }
    }

    /// The incremental path: recheck only the detail boundary.
    ///
    /// Processes the critical set in rounds. Every processed region is
    /// reclassified; if its new level differs from its parent's, the parent
    /// joins the critical set and the next round. Full-detail regions
    /// propagate downward via [`DepthMap::update_region_detail_level`],
    /// degraded ones via [`DepthMap::recursive_set_oob`]. Rounds climb the
    /// tree, so the work is bounded by the boundary regions and their
    /// immediate neighborhoods, not the tree size.
    fn check_critical_regions<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
    ) {
        let mut to_process: Vec<RegionId> = self.critical.iter().copied().collect();
        let mut next: HashSet<RegionId> = HashSet::new();

        while !to_process.is_empty() {
            for r in to_process.drain(..) {
                let level = self.evaluate(r, scene, viewport, options);

                if let Some(parent) = self.regions[r.idx()].parent() {
                    if level != self.regions[parent.idx()].detail() {
                        self.critical.insert(parent);
                        next.insert(parent);
                    }
                }

                if level.is_full() {
                    self.update_region_detail_level(scene, viewport, options, r, level);
                } else {
                    self.recursive_set_oob(r, level);
                }
            }
            to_process.extend(next.drain());
        }
    }

    /// Lazily created region bookkeeping, shared by `resolve`.
    fn create_region<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
        parent: Option<RegionId>,
    ) -> RegionId {
        let effective_scale = parent.map_or(1.0, |p| self.regions[p.idx()].effective_scale())
            * scene.content_scale(element);
        let id = RegionId::new(self.regions.len());
        self.regions.push(Region::new(element, parent, effective_scale));

        let level = self.evaluate(id, scene, viewport, options);
        self.regions[id.idx()].set_detail(level);

        match parent {
            Some(p) => {
                self.regions[p.idx()].add_child(id);
                // A lazily discovered child at a different level puts the
                // parent on the detail boundary.
                if level != self.regions[p.idx()].detail() {
                    self.critical.insert(p);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    fn resolve_one<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
    ) -> ElementRegions {
        let parent = scene.parent(element);
        let root_level = parent.is_none_or(|p| p == self.model_root);

        let containing = if root_level {
            None
        } else {
            // The parent resolved first; its record is in the index.
            let parent_record = parent
                .and_then(|p| self.index.get(&p).copied())
                .unwrap_or_default();
            parent_record.providing.or(parent_record.containing)
        };

        let providing = if root_level {
            // Immediate children of the model root always anchor a region.
            Some(self.create_region(scene, viewport, options, element, None))
        } else if scene.provides_region(element) {
            Some(self.create_region(scene, viewport, options, element, containing))
        } else {
            None
        };

        let record = ElementRegions {
            containing,
            providing,
        };
        self.index.insert(element, record);
        record
    }

    pub(crate) fn note_omitted(&mut self, element: Id) {
        self.omitted.insert(element);
    }

    pub(crate) fn note_rendered(&mut self, element: Id) {
        self.omitted.remove(&element);
    }

    pub(crate) fn omitted_contains(&self, element: Id) -> bool {
        self.omitted.contains(&element)
    }

    /// Snapshot of the current depth-map state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> DepthMapDebugInfo {
        DepthMapDebugInfo {
            region_count: self.regions.len(),
            root_region_count: self.roots.len(),
            indexed_element_count: self.index.len(),
            critical_count: self.critical.len(),
            omitted_count: self.omitted.len(),
            evaluations: self.evaluations,
            memoized: self.memo.is_some(),
        }
    }
}

/// Debug snapshot of a [`DepthMap`] state.
#[derive(Clone, Copy, Debug)]
pub struct DepthMapDebugInfo {
    /// Number of regions discovered so far.
    pub region_count: usize,
    /// Number of root regions.
    pub root_region_count: usize,
    /// Number of resolved scene elements.
    pub indexed_element_count: usize,
    /// Number of regions currently straddling a detail boundary.
    pub critical_count: usize,
    /// Number of elements whose children were skipped by the render gate.
    pub omitted_count: usize,
    /// Total detail-level evaluations performed.
    pub evaluations: u64,
    /// Whether classification inputs are memoized from a previous pass.
    pub memoized: bool,
}
