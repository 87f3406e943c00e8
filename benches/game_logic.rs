use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_linkup::core::{Board, GameSession, ManualClock, PathFinder, SessionConfig, SimpleRng};
use tui_linkup::types::Pos;

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut board = Board::new(8);

    c.bench_function("reset_and_generate_8x8", |b| {
        b.iter(|| {
            board.reset_and_generate(&mut rng);
            black_box(board.remaining_tiles());
        })
    });
}

fn bench_can_connect(c: &mut Criterion) {
    // Sparse board: most queries fall through to the lane search.
    let mut board = Board::generate(8, &mut SimpleRng::new(7));
    let occupied: Vec<Pos> = board.occupied().collect();
    for &p in occupied.iter().step_by(2) {
        board.set_kind(p, None);
    }
    let pf = PathFinder::new(&board);

    c.bench_function("can_connect_all_pairs", |b| {
        b.iter(|| {
            let mut n = 0u32;
            for y1 in 0..8 {
                for x1 in 0..8 {
                    for y2 in 0..8 {
                        for x2 in 0..8 {
                            if pf.can_connect(Pos::new(x1, y1), Pos::new(x2, y2)) {
                                n += 1;
                            }
                        }
                    }
                }
            }
            black_box(n)
        })
    });
}

fn bench_has_possible_moves(c: &mut Criterion) {
    let board = Board::generate(8, &mut SimpleRng::new(99));

    c.bench_function("has_possible_moves_full_board", |b| {
        b.iter(|| black_box(board.has_possible_moves()))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::with_seed(12345), ManualClock::new(0));
    session.start_new_game();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_can_connect,
    bench_has_possible_moves,
    bench_tick
);
criterion_main!(benches);
