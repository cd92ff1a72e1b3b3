use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use qtcollide::collision_detection::QuadTree;
use qtcollide::collision_detection::quadtree::{EntryKey, EntryMap, SpatialEntry};
use qtcollide::geometry::primitives::Rect;
use qtcollide::geometry::{GeoShape, ShapeKey};
use qtcollide::util::QTConfig;
use rand::prelude::{IteratorRandom, SmallRng};
use rand::{Rng, SeedableRng};
use slotmap::SlotMap;

criterion_main!(benches);
criterion_group!(
    benches,
    quadtree_insert_bench,
    quadtree_query_bench,
    quadtree_update_bench
);

const QT_DEPTHS: [u8; 6] = [1, 2, 3, 4, 5, 6];
const N_ENTRIES: usize = 1000;
const N_QUERIES: usize = 1000;
const N_UPDATES: usize = 50;
const WORLD_SIZE: f32 = 1000.0;

struct Scene {
    entries: EntryMap,
    keys: Vec<EntryKey>,
}

fn random_rect(rng: &mut SmallRng, max_size: f32) -> Rect {
    let x = rng.random_range(0.0..WORLD_SIZE - max_size);
    let y = rng.random_range(0.0..WORLD_SIZE - max_size);
    let w = rng.random_range(0.0..max_size);
    let h = rng.random_range(0.0..max_size);
    Rect::try_new(x, y, x + w, y + h).unwrap()
}

fn create_scene(rng: &mut SmallRng) -> Scene {
    let mut shapes: SlotMap<ShapeKey, GeoShape> = SlotMap::with_key();
    let mut entries = EntryMap::with_key();
    let keys = (0..N_ENTRIES)
        .map(|_| {
            let shape = GeoShape::Rect(random_rect(rng, 25.0));
            let skey = shapes.insert(shape);
            entries.insert(SpatialEntry::from_shape(skey, &shape))
        })
        .collect_vec();
    Scene { entries, keys }
}

fn create_quadtree(scene: &Scene, max_depth: u8) -> QuadTree {
    let config = QTConfig {
        max_depth,
        ..QTConfig::default()
    };
    let world = Rect::try_new(0.0, 0.0, WORLD_SIZE, WORLD_SIZE).unwrap();
    let mut qt = QuadTree::new(world, config);
    for key in scene.keys.iter() {
        qt.insert(*key, &scene.entries);
    }
    qt
}

/// Benchmark building a quadtree from scratch for different depths
fn quadtree_insert_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let scene = create_scene(&mut rng);

    let mut group = c.benchmark_group("quadtree_insert");
    for depth in QT_DEPTHS {
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            b.iter(|| create_quadtree(&scene, depth))
        });
    }
    group.finish();
}

/// Benchmark region queries of the quadtree for different depths
fn quadtree_query_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let scene = create_scene(&mut rng);
    let areas = (0..N_QUERIES)
        .map(|_| random_rect(&mut rng, 50.0))
        .collect_vec();

    let mut group = c.benchmark_group("quadtree_query");
    for depth in QT_DEPTHS {
        let qt = create_quadtree(&scene, depth);
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            b.iter(|| {
                areas
                    .iter()
                    .map(|area| qt.query(area, &scene.entries).len())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

/// Benchmark moving a handful of entries to random positions for different depths
fn quadtree_update_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut scene = create_scene(&mut rng);

    let mut group = c.benchmark_group("quadtree_update");
    for depth in QT_DEPTHS {
        let mut qt = create_quadtree(&scene, depth);
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            b.iter(|| {
                let selected = scene
                    .keys
                    .iter()
                    .copied()
                    .choose_multiple(&mut rng, N_UPDATES);
                for key in selected {
                    scene.entries[key].bounds = random_rect(&mut rng, 25.0);
                    qt.update(key, &scene.entries);
                }
            })
        });
    }
    group.finish();
}
