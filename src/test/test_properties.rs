mod test {
    use crate::agent::{OnlinePlanningAgent, PlanOutcome, WorldSnapshot};
    use crate::config::PlannerConfig;
    use crate::console_interface::parse_level;
    use crate::core::*;
    use crate::levels::CLASSIC;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// The classic maze with its ghosts moved to random open cells.
    fn scattered_ghosts(rng: &mut StdRng) -> Level {
        let mut level = parse_level(CLASSIC).unwrap();
        let open: Vec<GridCell> = (0..level.board.height())
            .flat_map(|row| (0..level.board.width()).map(move |col| GridCell::new(row, col)))
            .filter(|cell| level.board.is_walkable(cell) && *cell != level.player)
            .collect();

        let count = rng.random_range(1..=6);
        level.ghosts = (0..count)
            .map(|_| GhostMarker {
                cell: open[rng.random_range(0..open.len())],
                dead: rng.random_bool(0.2),
            })
            .collect();
        level.power_mode = rng.random_bool(0.2);
        level
    }

    #[test]
    fn plans_are_safe_connected_and_end_on_food() {
        let agent = OnlinePlanningAgent::new(&PlannerConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..40 {
            let level = scattered_ghosts(&mut rng);
            let world = WorldSnapshot::from_level(&level, agent.mapper(), Direction::Left);
            let perception = agent.perceive(&world);

            match agent.plan(&world) {
                PlanOutcome::Planned { direction, goal, path } => {
                    assert_eq!(path.first(), Some(&level.player));
                    assert_eq!(path.last(), Some(&goal));
                    assert!(level.board[goal].is_pellet());
                    assert_eq!(path[0].neighbor(direction, level.board.width()), path[1]);
                    for pair in path.windows(2) {
                        assert!(
                            Direction::ALL
                                .iter()
                                .any(|&dir| pair[0].neighbor(dir, level.board.width()) == pair[1]),
                            "{:?} is not next to {:?}",
                            pair[0],
                            pair[1]
                        );
                    }
                    for cell in &path[1..] {
                        assert!(level.board.is_walkable(cell));
                        assert!(!perception.hazards.threatens(cell, agent.danger_radius()));
                    }
                }
                PlanOutcome::Failsafe(direction) => assert!(world.turns_allowed.is_open(direction)),
                PlanOutcome::Stalled(direction) => assert_eq!(direction, Direction::Left),
                PlanOutcome::LevelComplete => panic!("classic maze still has food"),
            }
        }
    }

    #[test]
    fn planning_is_deterministic_for_any_snapshot() {
        let agent = OnlinePlanningAgent::new(&PlannerConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let world = WorldSnapshot::from_level(&scattered_ghosts(&mut rng), agent.mapper(), Direction::Up);
            assert_eq!(agent.plan(&world), agent.plan(&world.clone()));
        }
    }

    #[test]
    fn greedy_play_clears_an_open_room() {
        let agent = OnlinePlanningAgent::new(&PlannerConfig::default()).unwrap();
        let mut level = parse_level(
            "
╭------╮
|P. . .|
|. o  .|
|..  . |
╰------╯
",
        )
        .unwrap();

        let mut direction = Direction::Right;
        for _ in 0..100 {
            let world = WorldSnapshot::from_level(&level, agent.mapper(), direction);
            let Some(next) = agent.select_action(&world) else {
                break;
            };
            direction = next;
            if let StepUpdate::NextState(next_level, _) = step(&level, direction) {
                level = next_level;
            }
        }

        assert!(!level.board.has_food());
        assert!(level.power_mode);
    }
}
