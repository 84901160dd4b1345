use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use big_two::{classify, Card, Deck, GameRng, Move, PlayerId, Table, TableConfig};

fn parse(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

/// Classify one hand of each five-card shape, plus a reject.
fn bench_classify_five(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_five");
    let hands = [
        ("straight", "D3 C4 H5 S6 D7"),
        ("flush", "C3 C5 C8 CJ CK"),
        ("full_house", "D9 C9 H9 S4 D4"),
        ("quad", "D9 C9 H9 S9 D4"),
        ("straight_flush", "HT HJ HQ HK HA"),
        ("nothing", "D3 C5 H8 SJ DK"),
    ];
    for (name, hand) in hands {
        let cards = parse(hand);
        group.bench_with_input(BenchmarkId::from_parameter(name), &cards, |b, cards| {
            b.iter(|| classify(PlayerId::new(0), black_box(cards)));
        });
    }
    group.finish();
}

/// Compare two full houses.
fn bench_beats(c: &mut Criterion) {
    let a = classify(PlayerId::new(0), &parse("D9 C9 H9 S4 D4")).unwrap();
    let b = classify(PlayerId::new(1), &parse("DT CT HT S3 D3")).unwrap();

    c.bench_function("beats_full_house", |bench| {
        bench.iter(|| black_box(&b).beats(black_box(&a)));
    });
}

/// Shuffle, deal and open a round.
fn bench_deal_and_open(c: &mut Criterion) {
    let mut rng = GameRng::new(42);

    c.bench_function("deal_and_open", |b| {
        b.iter(|| {
            let mut table = Table::new(TableConfig::default()).unwrap();
            let dealt = table.start_round(Deck::shuffled(&mut rng)).unwrap();
            let seat = dealt.opening_player.index();
            let open = table.select(seat, &[0]).unwrap();
            table.propose_move(seat, Move::Play(open)).unwrap()
        });
    });
}

criterion_group!(benches, bench_classify_five, bench_beats, bench_deal_and_open);
criterion_main!(benches);
