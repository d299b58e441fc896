use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_ataxx::game_state::board::Board;
use plum_ataxx::game_state::game_state::GameState;
use plum_ataxx::search::board_scoring::PieceDifferentialScorer;
use plum_ataxx::search::minimax::{find_move, SearchConfig};
use plum_ataxx::utils::engine_match_harness::apply_seeded_random_opening;

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let (midgame, _) = apply_seeded_random_opening(&GameState::new_game(), 42, 10)
        .expect("opening should apply");
    let cases = [("startpos", GameState::new_game()), ("midgame", midgame)];

    for (name, game) in cases {
        let color = game.color_to_move();
        for depth in [2u8, 3, 4] {
            let config = SearchConfig { max_depth: depth };
            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result =
                            find_move(black_box(&game), color, &PieceDifferentialScorer, *config)
                                .expect("search should run");
                        black_box(result.value)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(minimax_benches, bench_minimax);
criterion_main!(minimax_benches);
