use snake_engine::board::{Board, DeathReason, GameStatus};
use snake_engine::config::{BoardConfig, BoundaryPolicy, GridSize};
use snake_engine::direction::Direction;
use snake_engine::grid::Cell;
use snake_engine::snake::Position;

fn seeded(width: u16, height: u16, seed: u64) -> Board {
    Board::new_with_seed(BoardConfig::new(width, height), seed)
        .expect("test dimensions are above the minimum")
}

fn place(board: &mut Board, x: i32, y: i32) {
    board
        .place_food(Position { x, y })
        .expect("scripted food target is free");
}

fn count(board: &Board, cell: Cell) -> usize {
    board
        .cells()
        .iter()
        .filter(|&&candidate| candidate == cell)
        .count()
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut board = seeded(8, 8, 42);

    place(&mut board, 5, 4);
    board.tick();
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.score(), 1);
    assert_eq!(board.snake().len(), 4);
    assert_eq!(board.snake().head(), Position { x: 5, y: 4 });

    place(&mut board, 5, 3);
    board.change_direction(Direction::Up);
    board.tick();
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.score(), 2);
    assert_eq!(board.snake().len(), 5);
    assert_eq!(board.snake().head(), Position { x: 5, y: 3 });

    // Park the food out of the path and run the snake into the top wall.
    place(&mut board, 0, 0);
    board.tick();
    board.tick();
    board.tick();
    assert_eq!(board.snake().head(), Position { x: 5, y: 0 });
    assert_eq!(board.status(), GameStatus::Running);

    let before: Vec<Cell> = board.cells().to_vec();
    board.tick();

    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.death_reason(), Some(DeathReason::Wall));
    assert_eq!(board.score(), 2);
    assert_eq!(board.cells(), before.as_slice());
    assert_eq!(board.snake().head(), Position { x: 5, y: 0 });
}

#[test]
fn tail_chase_loop_survives_many_cycles() {
    let mut board = seeded(8, 8, 5);

    place(&mut board, 5, 4);
    board.tick();
    assert_eq!(board.snake().len(), 4);
    place(&mut board, 0, 0);

    // Three opening turns walk the four-segment body onto a 2x2 block;
    // after that every move in the cycle enters the cell the tail vacates
    // in the same tick.
    let cycle = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];
    for (index, direction) in cycle.iter().cycle().take(12).enumerate() {
        board.change_direction(*direction);
        board.tick();
        assert_eq!(
            board.status(),
            GameStatus::Running,
            "loop move {} should be legal",
            index
        );
        assert_eq!(board.snake().len(), 4);
    }

    assert_eq!(board.snake().head(), Position { x: 5, y: 4 });
    assert_eq!(board.score(), 1);
    assert_eq!(count(&board, Cell::Occupied), 4);
    assert_eq!(count(&board, Cell::Food), 1);
}

#[test]
fn serpentine_fill_wins_the_board() {
    let mut board = seeded(4, 4, 3);

    // Hamiltonian walk over the 13 cells the initial body leaves free;
    // food is scripted one step ahead, so the snake grows on every tick
    // and the tail never moves.
    let walk = [
        (Direction::Up, Position { x: 2, y: 1 }),
        (Direction::Left, Position { x: 1, y: 1 }),
        (Direction::Left, Position { x: 0, y: 1 }),
        (Direction::Up, Position { x: 0, y: 0 }),
        (Direction::Right, Position { x: 1, y: 0 }),
        (Direction::Right, Position { x: 2, y: 0 }),
        (Direction::Right, Position { x: 3, y: 0 }),
        (Direction::Down, Position { x: 3, y: 1 }),
        (Direction::Down, Position { x: 3, y: 2 }),
        (Direction::Down, Position { x: 3, y: 3 }),
        (Direction::Left, Position { x: 2, y: 3 }),
        (Direction::Left, Position { x: 1, y: 3 }),
        (Direction::Left, Position { x: 0, y: 3 }),
    ];

    for (step, (direction, target)) in walk.iter().enumerate() {
        board.place_food(*target).expect("walk target is free");
        board.change_direction(*direction);
        board.tick();

        let eaten = step + 1;
        assert_eq!(board.score() as usize, eaten);
        assert_eq!(board.snake().len(), 3 + eaten);
        if eaten < walk.len() {
            assert_eq!(board.status(), GameStatus::Running);
        }
    }

    assert_eq!(board.status(), GameStatus::Won);
    assert_eq!(board.score(), 13);
    assert_eq!(board.snake().len(), 16);
    assert_eq!(board.food(), None);
    assert_eq!(board.death_reason(), None);
    assert_eq!(count(&board, Cell::Occupied), 16);
    assert_eq!(count(&board, Cell::Food), 0);

    // Terminal stability on the winning side.
    let frozen: Vec<Cell> = board.cells().to_vec();
    board.tick();
    assert_eq!(board.cells(), frozen.as_slice());
    assert_eq!(board.score(), 13);

    // A reset leaves the win behind and starts a playable round.
    board.reset();
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.score(), 0);
    assert_eq!(board.snake().len(), 3);
    assert_eq!(count(&board, Cell::Occupied), 3);
    assert_eq!(count(&board, Cell::Food), 1);
    board.tick();
    assert_eq!(board.status(), GameStatus::Running);
}

#[test]
fn torus_crossings_return_on_the_far_side() {
    let config = BoardConfig {
        size: GridSize {
            width: 8,
            height: 8,
        },
        boundary: BoundaryPolicy::Torus,
    };
    let mut board = Board::new_with_seed(config, 21).expect("valid dimensions");
    place(&mut board, 0, 0);

    // Rightward across the vertical seam.
    for _ in 0..4 {
        board.tick();
    }
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.snake().head(), Position { x: 0, y: 4 });

    board.tick();
    board.tick();
    assert_eq!(board.snake().head(), Position { x: 2, y: 4 });

    // Upward across the horizontal seam.
    board.change_direction(Direction::Up);
    for _ in 0..5 {
        board.tick();
    }
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.snake().head(), Position { x: 2, y: 7 });
    assert_eq!(board.score(), 0);
    assert_eq!(board.snake().len(), 3);
    assert_eq!(count(&board, Cell::Occupied), 3);
}
