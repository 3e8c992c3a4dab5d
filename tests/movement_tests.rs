//! Movement invariants for the snake on a wrap-around grid.

use proptest::prelude::*;

use snake_loop::core::{Actor, World};
use snake_loop::types::{Direction, Position};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

#[test]
fn head_moves_one_cell_right() {
    let mut world = World::new(20, 20);
    let snake = world.add(Actor::new(Position::new(0, 0), 9));

    world.advance();
    assert_eq!(world.actor(snake).unwrap().head(), Position::new(1, 0));
}

#[test]
fn twenty_steps_wrap_back_to_origin() {
    let mut world = World::new(20, 20);
    let snake = world.add(Actor::new(Position::new(0, 0), 9));

    for _ in 0..20 {
        world.advance();
    }
    let actor = world.actor(snake).unwrap();
    assert_eq!(actor.head(), Position::new(0, 0));
    assert_eq!(world.get(snake).unwrap().position(), Position::new(0, 0));
    assert_eq!(actor.len(), 9);
}

#[test]
fn tail_follows_head_into_a_turn() {
    let mut actor = Actor::new(Position::new(5, 5), 3);
    actor.advance(20, 20);
    actor.set_direction(Direction::Up);
    actor.advance(20, 20);

    assert_eq!(
        actor.body(),
        &[Position::new(6, 4), Position::new(6, 5), Position::new(5, 5)]
    );
}

proptest! {
    #[test]
    fn prop_head_wraps_with_euclidean_modulo(
        x in -50i32..50,
        y in -50i32..50,
        w in 1u16..40,
        h in 1u16..40,
        dir in direction_strategy(),
        speed in -5i32..=5,
    ) {
        let mut actor = Actor::new(Position::new(x, y), 1)
            .with_direction(dir)
            .with_speed(speed);
        actor.advance(w, h);

        let (dx, dy) = dir.delta();
        let expected = Position::new(
            (x + dx * speed).rem_euclid(i32::from(w)),
            (y + dy * speed).rem_euclid(i32::from(h)),
        );
        prop_assert_eq!(actor.head(), expected);
        prop_assert!(actor.head().x >= 0 && actor.head().x < i32::from(w));
        prop_assert!(actor.head().y >= 0 && actor.head().y < i32::from(h));
    }

    #[test]
    fn prop_body_shifts_by_one_segment(
        length in 1usize..30,
        moves in prop::collection::vec(direction_strategy(), 1..60),
    ) {
        let mut actor = Actor::new(Position::new(3, 3), length);

        for dir in moves {
            let old = actor.body().to_vec();
            actor.set_direction(dir);
            actor.advance(20, 20);

            let new = actor.body();
            prop_assert_eq!(new.len(), length);
            for i in 1..new.len() {
                prop_assert_eq!(new[i], old[i - 1]);
            }
        }
    }
}
