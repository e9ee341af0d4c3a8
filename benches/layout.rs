//! Criterion benchmarks for the placement and projection hot path.
//!
//! Run with:
//!     cargo bench --bench layout

use criterion::{criterion_group, criterion_main, Criterion};

use domino_layout_engine::placement::PlacementError;
use domino_layout_engine::{
    project_coordinates, resolve_placement, CanvasSpec, Chain, Side, Tile, DEFAULT_TRACK,
};

/// Closed 28-tile chain: consecutive entries share a pip value.
const CIRCUIT: [(u8, u8); 28] = [
    (0, 0),
    (0, 1),
    (1, 1),
    (1, 2),
    (2, 2),
    (2, 0),
    (0, 3),
    (3, 3),
    (3, 1),
    (1, 4),
    (4, 4),
    (4, 2),
    (2, 3),
    (3, 4),
    (4, 0),
    (0, 5),
    (5, 5),
    (5, 1),
    (1, 6),
    (6, 6),
    (6, 2),
    (2, 5),
    (5, 3),
    (3, 6),
    (6, 4),
    (4, 5),
    (5, 6),
    (6, 0),
];

fn build_full_chain() -> Chain {
    let tiles: Vec<Tile> = CIRCUIT
        .iter()
        .enumerate()
        .map(|(id, &(top, bottom))| Tile::new(id as u8, top, bottom))
        .collect();

    let mut chain = Chain::new();
    resolve_placement(&DEFAULT_TRACK, &mut chain, tiles[0], Side::Right).unwrap();
    let mut i = 1;
    let mut j = tiles.len() - 1;
    while i <= j {
        match resolve_placement(&DEFAULT_TRACK, &mut chain, tiles[i], Side::Right) {
            Ok(_) => i += 1,
            Err(PlacementError::WrongEndForTie { .. }) => {
                resolve_placement(&DEFAULT_TRACK, &mut chain, tiles[j], Side::Left).unwrap();
                j -= 1;
            }
            Err(other) => panic!("bench chain construction failed: {other}"),
        }
    }
    chain
}

fn bench_resolve_full_game(c: &mut Criterion) {
    c.bench_function("resolve_full_game", |b| {
        b.iter(|| {
            let chain = build_full_chain();
            assert_eq!(chain.len(), 28);
            chain
        })
    });
}

fn bench_project_full_chain(c: &mut Criterion) {
    let chain = build_full_chain();
    let canvas = CanvasSpec::default();
    c.bench_function("project_full_chain", |b| {
        b.iter(|| project_coordinates(&DEFAULT_TRACK, &chain, &canvas).unwrap())
    });
}

criterion_group!(benches, bench_resolve_full_game, bench_project_full_chain);
criterion_main!(benches);
