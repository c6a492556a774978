use bidir_pathfinding::{
    solver::{astar::AstarSolver, bidirectional::BidirectionalSolver, PathSolver},
    PathMap, TileTerrain, WALL_WEIGHT,
};
use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 32;

fn random_terrain(rng: &mut StdRng, wall_chance: f64) -> TileTerrain<f64> {
    let tiles = (0..N * N)
        .map(|_| {
            if rng.gen_bool(wall_chance) {
                WALL_WEIGHT
            } else {
                rng.gen_range(1..=9) as f64
            }
        })
        .collect();
    TileTerrain::new(N, N, tiles).unwrap()
}

fn random_scenarios(map: &PathMap, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let goal = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if map.reachable(&start, &goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn bench_solver<S: PathSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    for wall_chance in [0.0, 0.2] {
        let map = PathMap::new(&random_terrain(&mut rng, wall_chance)).unwrap();
        let scenarios = random_scenarios(&map, &mut rng);
        let walls_str = format!("{}% walls", (wall_chance * 100.0) as u32);
        c.bench_function(format!("{N}x{N}, {solver_name}, {walls_str}").as_str(), |b| {
            b.iter(|| {
                for (start, goal) in &scenarios {
                    black_box(solver.find_point_path(&map, *start, *goal));
                }
            })
        });
    }
}

fn bench_bidirectional(c: &mut Criterion) {
    bench_solver(c, "Bidirectional", BidirectionalSolver::new());
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new());
}

criterion_group!(benches, bench_bidirectional, bench_astar);
criterion_main!(benches);
