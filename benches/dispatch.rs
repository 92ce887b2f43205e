use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rogue_effects::core::Direction;
use rogue_effects::effects::{EffectKind, Effects};
use rogue_effects::world::{GameWorld, Monster};

fn populated_world(seed: u64) -> GameWorld {
    let mut world = GameWorld::new(seed);
    let ppos = world.player.pos;
    for i in 1..=8 {
        world
            .monsters
            .push(Monster::new((ppos.0 + i, ppos.1 + i % 3), i32::MAX / 2));
    }
    world
}

fn bench_resolve_bolt(c: &mut Criterion) {
    let effects = Effects::new();
    c.bench_function("resolve_fire_bolt", |b| {
        let mut world = populated_world(42);
        b.iter(|| {
            let mut ident = false;
            effects.resolve(
                &mut world,
                black_box(EffectKind::FireBolt.id()),
                &mut ident,
                true,
                Some(Direction::East),
                0,
                50,
            )
        });
    });
}

fn bench_resolve_cure(c: &mut Criterion) {
    let effects = Effects::new();
    c.bench_function("resolve_cure_critical", |b| {
        let mut world = populated_world(42);
        b.iter(|| {
            let mut ident = false;
            effects.resolve(
                &mut world,
                black_box(EffectKind::CureCritical.id()),
                &mut ident,
                true,
                None,
                0,
                0,
            )
        });
    });
}

fn bench_full_catalog_sweep(c: &mut Criterion) {
    let effects = Effects::new();
    c.bench_function("resolve_full_catalog", |b| {
        b.iter(|| {
            let mut world = populated_world(42);
            let mut ident = false;
            for id in 1..=EffectKind::MAX {
                effects.resolve(
                    &mut world,
                    black_box(id),
                    &mut ident,
                    true,
                    Some(Direction::East),
                    10,
                    25,
                );
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_bolt,
    bench_resolve_cure,
    bench_full_catalog_sweep
);
criterion_main!(benches);
