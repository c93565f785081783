use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memorize::core::{build_deck, theme, DeckRng, GameSnapshot, GameState, Store};
use tui_memorize::term::{FrameBuffer, GameView, Viewport};
use tui_memorize::types::GameAction;

fn bench_build_deck(c: &mut Criterion) {
    let symbols = theme::lookup("Food 🍕");
    let mut rng = DeckRng::seeded(12345);

    c.bench_function("build_deck_8_pairs", |b| {
        b.iter(|| build_deck(black_box(symbols), black_box(8), &mut rng))
    });
}

fn bench_flip(c: &mut Criterion) {
    let mut store = Store::new(GameState::with_seed("Animals 🐶", 12345));

    c.bench_function("dispatch_flip", |b| {
        b.iter(|| {
            store.dispatch(black_box(GameAction::Flip));
        })
    });
}

fn bench_theme_cycle(c: &mut Criterion) {
    let mut state = GameState::with_seed("Halloween 👻", 12345);

    c.bench_function("next_theme", |b| {
        b.iter(|| {
            state.next_theme();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::with_seed("Food 🍕", 12345);
    for i in (0..16).step_by(3) {
        state.flip(i);
    }
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_100x30", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_build_deck, bench_flip, bench_theme_cycle, bench_render);
criterion_main!(benches);
