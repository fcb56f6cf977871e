//! Print build diagnostics through tracing.
//!
//! Run with `RUST_LOG=flatquad=trace` to also see pruned quadrants.
use flatquad::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatquad=debug")))
        .init();

    let boxes: Vec<Rect> = (0..32)
        .map(|i| {
            let min = Vec2::new((i * 3 % 64) as f32, (i * 7 % 64) as f32);
            Rect::new(min, min + Vec2::splat(2.0))
        })
        .collect();
    let config = Config::new(Vec2::ZERO, Vec2::splat(64.0)).with_max_depth(3);
    let tree = QuadTree::build_with(boxes, &config, |b: &Rect, min: Vec2, max: Vec2| b.inside_of(&Rect { min, max }));

    for (i, node) in tree.nodes().iter().enumerate() {
        println!(
            "node {:>2} {:?}..{:?} own {:>2} total {:>2}",
            i,
            node.region().min,
            node.region().max,
            node.own_count(),
            node.subtree_count()
        );
    }
}
