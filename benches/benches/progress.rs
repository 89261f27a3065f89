// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cost of the every-section-every-tick recompute loop.
//!
//! The engine deliberately publishes progress for every registered section
//! on every scroll tick instead of culling offscreen ones; this bench sizes
//! that choice across section counts far beyond a realistic page.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use strata_engine::{
    EventBindings, GeometryProvider, ProgressSink, ScrollEngine, ScrollMotion, ScrollState,
    ScrollSurface, ScrollTarget,
};
use strata_orientation::Axis;
use strata_sections::SectionRegistry;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_extent(&mut self) -> f64 {
        400.0 + f64::from(self.next_u32() % 800)
    }
}

/// Host with `n` sections stacked vertically; publishing is a `black_box`.
struct BenchPage {
    sections: Vec<(f64, f64)>,
    scroll: f64,
    total: f64,
}

impl BenchPage {
    fn new(n: u32, seed: u64) -> Self {
        let mut rng = Lcg::new(seed);
        let mut sections = Vec::with_capacity(n as usize);
        let mut cursor = 0.0;
        for _ in 0..n {
            let size = rng.next_extent();
            sections.push((cursor, size));
            cursor += size;
        }
        Self {
            sections,
            scroll: 0.0,
            total: cursor,
        }
    }
}

impl GeometryProvider<u32> for BenchPage {
    fn section_rect(&self, key: &u32) -> Option<Rect> {
        let &(start, size) = self.sections.get(*key as usize)?;
        let lead = start - self.scroll;
        Some(Rect::new(0.0, lead, 800.0, lead + size))
    }

    fn scroll_state(&self, _axis: Axis) -> Option<ScrollState> {
        Some(ScrollState {
            offset: self.scroll,
            extent: 800.0,
        })
    }
}

impl ScrollSurface for BenchPage {
    fn scroll_to(&mut self, _axis: Axis, offset: f64, _motion: ScrollMotion) {
        self.scroll = offset;
    }

    fn force_reflow(&mut self) {}
}

impl EventBindings<u32> for BenchPage {
    fn bind_scroll(&mut self, _target: ScrollTarget) {}
    fn unbind_scroll(&mut self, _target: ScrollTarget) {}
    fn bind_resize(&mut self) {}
    fn unbind_resize(&mut self) {}
    fn bind_nav(&mut self, _key: &u32) {}
    fn unbind_nav(&mut self, _key: &u32) {}
}

impl ProgressSink<u32> for BenchPage {
    fn publish(&mut self, key: &u32, progress: f64) {
        black_box((*key, progress));
    }
}

fn bench_scroll_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_tick");
    for n in [4_u32, 64, 1024] {
        group.bench_function(format!("{n}_sections"), |b| {
            let mut page = BenchPage::new(n, 0x5eed);
            let mut engine = ScrollEngine::new(SectionRegistry::from_iter(0..n));
            engine.mount(390.0, 844.0, &mut page);

            let mut rng = Lcg::new(42);
            let total = page.total;
            b.iter(|| {
                page.scroll = f64::from(rng.next_u32()) % total;
                engine.on_scroll(&mut page);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scroll_tick);
criterion_main!(benches);
