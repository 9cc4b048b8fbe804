use std::collections::HashSet;

use grid_life::grid::{GridError, Pattern, World, WorldConfig};

fn world_with(width: u32, height: u32, cells: &[(u32, u32)]) -> World {
    World::from_provider(width, height, Pattern::new(cells.iter().copied())).unwrap()
}

fn collect_live(world: &World) -> HashSet<(u32, u32)> {
    let mut out = HashSet::new();
    world.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn assert_alive(world: &World, cells: &[(u32, u32)]) {
    for &(x, y) in cells {
        assert!(world.is_alive(x, y), "expected alive at ({x},{y})");
    }
}

fn assert_dead(world: &World, cells: &[(u32, u32)]) {
    for &(x, y) in cells {
        assert!(!world.is_alive(x, y), "expected dead at ({x},{y})");
    }
}

#[test]
fn fresh_world_has_one_cell_per_coordinate() {
    for (width, height) in [(1, 1), (1, 7), (9, 1), (13, 5), (150, 40)] {
        let world = World::new(width, height).unwrap();
        assert_eq!(world.cells().len(), (width * height) as usize);
        let coords: HashSet<_> = world.cells().iter().map(|c| c.coords()).collect();
        assert_eq!(coords.len(), (width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                assert_eq!(world.cell_at(x, y).unwrap().coords(), (x, y));
            }
        }
        assert!(world.cell_at(width, 0).is_none());
        assert!(world.cell_at(0, height).is_none());
    }
}

#[test]
fn single_cell_world_has_no_neighbors() {
    let mut world = world_with(1, 1, &[(0, 0)]);
    assert!(world.cell_at(0, 0).unwrap().neighbors().is_empty());
    world.tick();
    assert_eq!(world.population(), 0);
}

#[test]
fn zero_dimensions_are_rejected() {
    for (width, height) in [(0, 5), (5, 0), (0, 0)] {
        let err = World::new(width, height).unwrap_err();
        assert!(
            matches!(err, GridError::InvalidDimension { .. }),
            "{width}x{height} gave {err}"
        );
    }
}

#[test]
fn oversized_grid_is_rejected() {
    let err = World::new(u32::MAX, 2).unwrap_err();
    assert!(matches!(err, GridError::InvalidDimension { .. }));
}

#[test]
fn out_of_range_probability_is_rejected() {
    for p in [-0.1, 1.5, f64::NAN] {
        let config = WorldConfig::new(4, 4).initial_alive_probability(p);
        assert!(matches!(
            World::with_config(&config),
            Err(GridError::InvalidProbability(_))
        ));
    }
}

#[test]
fn probability_extremes_fill_or_empty_the_grid() {
    let empty = World::with_config(&WorldConfig::new(20, 10).initial_alive_probability(0.0)).unwrap();
    assert_eq!(empty.population(), 0);
    let full = World::with_config(&WorldConfig::new(20, 10).initial_alive_probability(1.0)).unwrap();
    assert_eq!(full.population(), 200);
}

#[test]
fn isolated_cell_dies() {
    let mut world = world_with(3, 3, &[(1, 1)]);
    assert_eq!(world.cell_at(1, 1).unwrap().alive_neighbor_count(), 0);

    world.tick();

    assert_dead(&world, &[(1, 1)]);
    assert_eq!(world.population(), 0);
}

#[test]
fn block_is_stable() {
    let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
    let mut world = world_with(4, 4, &block);
    let initial = world.render();

    for _ in 0..10 {
        world.tick();
        assert_alive(&world, &block);
        assert_eq!(world.population(), 4);
    }
    assert_eq!(world.render(), initial);
}

#[test]
fn blinker_oscillates() {
    let mut world = world_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let horizontal = collect_live(&world);

    world.tick();

    assert_alive(&world, &[(2, 1), (2, 2), (2, 3)]);
    assert_dead(&world, &[(1, 2), (3, 2)]);
    let vertical = collect_live(&world);
    assert_ne!(vertical, horizontal);

    world.tick();

    assert_eq!(collect_live(&world), horizontal);
    world.tick();
    assert_eq!(collect_live(&world), vertical);
}

#[test]
fn glider_stops_at_the_wall() {
    // Glider heading toward +x/+y, which ends as a block in the corner.
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut world = world_with(6, 6, &glider);

    world.tick();
    world.tick();
    world.tick();
    world.tick();
    assert_alive(&world, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);

    for _ in 0..20 {
        world.tick();
    }
    assert_eq!(collect_live(&world), HashSet::from([(4, 4), (5, 4), (4, 5), (5, 5)]));
}

#[test]
fn render_layout_matches_grid() {
    let world = world_with(4, 3, &[(0, 0), (3, 0), (1, 2)]);
    let rendered = world.render();

    assert_eq!(rendered.len(), 3 * (4 + 1));
    assert_eq!(rendered, "o  o\n    \n o  \n");
    assert_eq!(world.to_string(), rendered);
    for line in rendered.lines() {
        assert_eq!(line.chars().count(), 4);
    }
}

#[test]
fn render_is_idempotent() {
    let mut world = World::with_config(&WorldConfig::new(30, 12).seed(9)).unwrap();
    assert_eq!(world.render(), world.render());
    world.tick();
    let first = world.render();
    assert_eq!(first, world.render());
    assert_eq!(world.generation(), 1);
}

#[test]
fn generation_counts_ticks() {
    let mut world = World::new(8, 8).unwrap();
    assert_eq!(world.generation(), 0);
    for expected in 1..=12 {
        world.tick();
        assert_eq!(world.generation(), expected);
    }
}

#[test]
fn identical_seeds_evolve_identically() {
    let config = WorldConfig::new(48, 32).initial_alive_probability(0.3).seed(0xC0FFEE);
    let mut a = World::with_config(&config).unwrap();
    let mut b = World::with_config(&config).unwrap();
    assert_eq!(a.render(), b.render());
    for _ in 0..30 {
        a.tick();
        b.tick();
        assert_eq!(a.render(), b.render());
    }
}
