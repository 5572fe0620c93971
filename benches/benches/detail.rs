// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};

use canopy_detail::{DepthMap, DetailOptions};
use canopy_scene::{DiagramTree, ElementFlags, ElementId, LocalElement};
use canopy_view2d::DiagramViewport;

fn region_element(bounds: Rect) -> LocalElement {
    LocalElement {
        bounds: Some(bounds),
        flags: ElementFlags::CHILD_AREA,
        ..LocalElement::default()
    }
}

/// A grid of `side * side` top-level regions, each nesting `depth` levels of
/// progressively smaller child regions.
fn build_tree(side: u32, depth: u32) -> (DiagramTree, Vec<ElementId>) {
    let mut tree = DiagramTree::new();
    let mut deepest = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let x = f64::from(col) * 250.0;
            let y = f64::from(row) * 250.0;
            let mut parent = tree.insert(
                tree.root(),
                region_element(Rect::new(x, y, x + 200.0, y + 200.0)),
            );
            let mut extent = 200.0;
            for _ in 0..depth {
                extent *= 0.4;
                parent = tree.insert(
                    parent,
                    region_element(Rect::new(10.0, 10.0, 10.0 + extent, 10.0 + extent)),
                );
            }
            // A leaf so the innermost flagged element really is a boundary.
            deepest.push(tree.insert(parent, LocalElement::default()));
        }
    }
    (tree, deepest)
}

fn bench_lazy_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("detail_resolve");
    let viewport = DiagramViewport::new(Size::new(1000.0, 1000.0));
    let options = DetailOptions::default();

    for (side, depth) in [(10u32, 3u32), (30, 5)] {
        let (tree, deepest) = build_tree(side, depth);
        group.bench_function(format!("cold_{side}x{side}_depth{depth}"), |b| {
            b.iter_batched(
                || DepthMap::new(tree.root()),
                |mut map| {
                    for id in &deepest {
                        black_box(map.resolve(&tree, &viewport, &options, *id));
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("warm_{side}x{side}_depth{depth}"), |b| {
            let mut map = DepthMap::new(tree.root());
            for id in &deepest {
                map.resolve(&tree, &viewport, &options, *id);
            }
            b.iter(|| {
                for id in &deepest {
                    black_box(map.resolve(&tree, &viewport, &options, *id));
                }
            });
        });
    }
    group.finish();
}

fn bench_update_detail_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("detail_update");
    let options = DetailOptions::default();

    for (side, depth) in [(10u32, 3u32), (30, 5)] {
        let (tree, deepest) = build_tree(side, depth);
        let viewport = DiagramViewport::new(Size::new(1000.0, 1000.0));

        let mut map = DepthMap::new(tree.root());
        for id in &deepest {
            map.resolve(&tree, &viewport, &options, *id);
        }
        map.update_detail_levels(&tree, &viewport, &options);

        // Steady state: alternate between two nearby scroll positions so
        // every iteration misses the memo but only the detail boundary is
        // rechecked.
        group.bench_function(format!("incremental_scroll_{side}x{side}_depth{depth}"), |b| {
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let mut nudged = viewport.clone();
                nudged.set_scroll(Point::new(if flip { 3.0 } else { 0.0 }, 0.0));
                map.update_detail_levels(&tree, &nudged, &options);
                black_box(map.critical_len())
            });
        });

        // Worst case: zoom toggling between the extremes forces full
        // promotion and demotion sweeps.
        group.bench_function(format!("zoom_flip_{side}x{side}_depth{depth}"), |b| {
            let mut zoomed_in = false;
            b.iter(|| {
                zoomed_in = !zoomed_in;
                let mut vp = viewport.clone();
                vp.set_zoom(if zoomed_in { 50.0 } else { 1.0 });
                map.update_detail_levels(&tree, &vp, &options);
                black_box(map.evaluations())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lazy_resolution, bench_update_detail_levels);
criterion_main!(benches);
